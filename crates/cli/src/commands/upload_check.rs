//! Upload check command - Run the upload policy against a file.

use common::{Config, UploadPolicy};

use crate::cli::args::UploadCheckArgs;
use crate::errors::CommandResult;

/// Execute the upload-check command
pub fn execute(args: UploadCheckArgs, config: &Config) -> CommandResult<()> {
    let policy = UploadPolicy::from(config);

    policy.check(&args.filename, args.size)?;

    match policy.destination(&args.filename) {
        Some(path) => println!("accepted: {}", path.display()),
        None => println!("accepted"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CommandError;
    use common::UploadError;

    fn args(filename: &str, size: u64) -> UploadCheckArgs {
        UploadCheckArgs {
            env: Default::default(),
            filename: filename.to_string(),
            size,
        }
    }

    #[test]
    fn test_accepts_allowed_file() {
        assert!(execute(args("complaint.pdf", 1024), &Config::default()).is_ok());
    }

    #[test]
    fn test_rejects_oversized_file() {
        let err = execute(args("complaint.pdf", 17 * 1024 * 1024), &Config::default())
            .unwrap_err();

        assert!(matches!(
            err,
            CommandError::Upload(UploadError::TooLarge { .. })
        ));
    }
}
