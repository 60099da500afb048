//! .
//!
//! All fallible operations return [`anyhow::Result`]. Nothing is recovered: errors travel up to
//! `main` and end the process with a non-zero status.
pub use anyhow::{Error, Result};

/// Render the error chain, one cause per line, and echo it to stderr.
pub fn display(error: &Error) -> String {
  let mut msg = "Error:\n".to_string();
  error
    .chain()
    .enumerate()
    .for_each(|(index, error)| msg.push_str(&format!("└> {} - {}\n", index, error)));

  eprint!("{}", msg);
  msg
}

#[cfg(test)]
mod tests {
  use {super::*, anyhow::Context};

  #[test] fn display_chain() {
    let error = Err::<(), _>(std::io::Error::new(std::io::ErrorKind::NotFound, "no viewer"))
      .context("unable to display figure")
      .unwrap_err();
    let msg = display(&error);
    assert!(msg.starts_with("Error:\n"));
    assert!(msg.contains("└> 0 - unable to display figure"));
    assert!(msg.contains("└> 1 - no viewer"));
  }
}
