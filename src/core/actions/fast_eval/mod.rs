pub mod neighbour_fast_eval;
