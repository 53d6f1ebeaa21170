pub mod chunk;
pub mod errors;
pub mod options;
pub mod oracle;
pub mod session;
