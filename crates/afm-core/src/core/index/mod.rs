pub mod pair_index;
