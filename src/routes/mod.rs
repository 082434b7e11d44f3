mod contact;
mod root;
mod status;
mod submissions;

pub use contact::*;
pub use root::*;
pub use status::*;
pub use submissions::*;

/// Walks the whole source chain of an error, so the `Debug` output of our
/// route-level errors carries everything the log line needs.
pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
