mod body;
mod strength;
mod training;
