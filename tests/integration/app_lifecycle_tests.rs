/*!
 * Application lifecycle tests driving the controller through the filesystem
 */

use anyhow::Result;
use std::path::PathBuf;
use sublate::app_controller::Controller;
use crate::common;

/// Test a file-to-file run against an unreachable endpoint
#[test]
fn test_run_withUnreachableEndpoint_shouldWritePassthroughOutput() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let input_path = dir.path().join("episode.srt");
    std::fs::write(&input_path, common::sample_srt())?;

    let mut config = common::test_config();
    // Nothing listens here, so every batch degrades to passthrough
    config.translation.endpoint = "http://127.0.0.1:9/v1/chat/completions".to_string();
    let controller = Controller::with_config(config)?;

    let output_path = tokio_test::block_on(async {
        controller.run(&input_path, None).await
    })?;

    assert_eq!(output_path, dir.path().join("translated_episode.srt"));

    let output = std::fs::read_to_string(&output_path)?;
    assert!(output.contains("Hello there"));
    assert!(output.contains("Goodbye"));
    // Source numbering 1, 2, 5 comes out dense even untranslated
    assert!(output.contains("\n3\n00:00:09,000 --> 00:00:12,000\n"));
    Ok(())
}

/// Test that an explicit output path is honored
#[test]
fn test_run_withExplicitOutputPath_shouldWriteThere() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let input_path = dir.path().join("movie.srt");
    std::fs::write(&input_path, common::sample_srt())?;
    let explicit = dir.path().join("out/final.srt");

    let mut config = common::test_config();
    config.translation.endpoint = "http://127.0.0.1:9/v1/chat/completions".to_string();
    let controller = Controller::with_config(config)?;

    let output_path = tokio_test::block_on(async {
        controller.run(&input_path, Some(&explicit)).await
    })?;

    assert_eq!(output_path, explicit);
    assert!(explicit.exists());
    Ok(())
}

/// Test that a missing input file aborts before any processing
#[test]
fn test_run_withMissingInputFile_shouldFail() {
    let controller = Controller::with_config(common::test_config()).unwrap();

    let result = tokio_test::block_on(async {
        controller
            .run(&PathBuf::from("/nonexistent/missing.srt"), None)
            .await
    });

    assert!(result.is_err());
}
