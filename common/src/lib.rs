pub mod error;
pub mod history;
pub mod html;
pub mod jobs;
pub mod merge;
pub mod model;
pub mod requests;
pub mod tree;
