mod common;
mod estimate;
