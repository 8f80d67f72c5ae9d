pub mod dialog;
pub mod storage;
pub mod time;
