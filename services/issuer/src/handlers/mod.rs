pub mod laudo;
pub mod status;
