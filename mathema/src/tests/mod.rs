// Notation and classification
mod classifier;
mod normalizer;

// Symbolic core
mod expressions;
mod polynomial;

// Parser
mod parsing;



// Rendering and engine
mod engine;
