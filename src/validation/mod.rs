pub mod c_index;
pub mod outcome;
pub mod prediction;
