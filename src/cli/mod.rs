mod check;
mod server;

pub use check::check;
pub use server::serve;
