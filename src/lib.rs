pub mod console;
pub mod grading;
pub mod guessing;
pub mod wordcount;
