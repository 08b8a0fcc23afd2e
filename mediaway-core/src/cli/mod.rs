pub mod check;
pub mod reload;
pub mod run;
pub mod url;
