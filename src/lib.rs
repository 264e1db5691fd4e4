pub mod convert;
pub mod docx;
pub mod output;
pub mod quiz;
pub mod utility;
