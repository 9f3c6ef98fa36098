pub mod stemmers;

pub use stemmers::en::porter2::{
    get_r1, get_r1_r2, mark_consonant_y, porter2_stemmer, porter2_trace, Porter2Stage,
};
