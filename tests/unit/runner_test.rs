//! Tests for the notebook runner pipeline

use std::fs;

use nbkit::Error;
use nbkit::core::models::{CellType, ExecutionResult, NO_OUTPUT, Notebook};
use nbkit::core::services::NotebookRunner;
use nbkit::core::services::runner::PUBLISH_ERROR_PREFIX;
use tempfile::TempDir;

use crate::common::mocks::{StubExecutor, StubGenerator, StubPublisher};

const TEMPLATE: &str = "Write a clean Python script that {prompt}. Output only valid Python code.";

// =============================================================================
// NOTEBOOK ASSEMBLY
// =============================================================================

#[test]
fn test_notebook_has_single_cell_with_stripped_response() {
    let temp = TempDir::new().unwrap();
    let generator = StubGenerator::new("```python\ndef fact(n):\n    return 1 if n < 2 else n * fact(n - 1)\n```");
    let executor = StubExecutor::with_stdout("");
    let publisher = StubPublisher::succeeding();
    let runner = NotebookRunner::new(&generator, &executor, &publisher, temp.path(), TEMPLATE);

    let report = runner.run("write factorial code").unwrap();

    let notebook = Notebook::load(&report.notebook_path).unwrap();
    assert_eq!(notebook.cells.len(), 1);
    assert_eq!(notebook.cells[0].cell_type(), CellType::Code);
    assert_eq!(
        notebook.cells[0].source(),
        "def fact(n):\n    return 1 if n < 2 else n * fact(n - 1)"
    );
    assert_eq!(report.generated_code, notebook.cells[0].source());
}

#[test]
fn test_notebook_named_after_instruction() {
    let temp = TempDir::new().unwrap();
    let generator = StubGenerator::new("print(1)");
    let executor = StubExecutor::with_stdout("1\n");
    let publisher = StubPublisher::succeeding();
    let runner = NotebookRunner::new(&generator, &executor, &publisher, temp.path(), TEMPLATE);

    let report = runner.run("print one").unwrap();
    assert_eq!(report.notebook_path, temp.path().join("print_one.ipynb"));
    assert!(report.notebook_path.exists());
}

#[test]
fn test_same_instruction_overwrites_notebook() {
    let temp = TempDir::new().unwrap();
    let executor = StubExecutor::with_stdout("");
    let publisher = StubPublisher::succeeding();

    let first = StubGenerator::new("print('first')");
    NotebookRunner::new(&first, &executor, &publisher, temp.path(), TEMPLATE)
        .run("say hi")
        .unwrap();

    let second = StubGenerator::new("print('second')");
    let report = NotebookRunner::new(&second, &executor, &publisher, temp.path(), TEMPLATE)
        .run("say hi")
        .unwrap();

    let entries: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
    let notebook = Notebook::load(&report.notebook_path).unwrap();
    assert_eq!(notebook.cells[0].source(), "print('second')");
}

#[test]
fn test_staging_dir_created_on_demand() {
    let temp = TempDir::new().unwrap();
    let staging = temp.path().join("nested/notebooks");
    let generator = StubGenerator::new("x = 1");
    let executor = StubExecutor::with_stdout("");
    let publisher = StubPublisher::succeeding();
    let runner = NotebookRunner::new(&generator, &executor, &publisher, &staging, TEMPLATE);

    runner.run("assign x").unwrap();
    assert!(staging.join("assign_x.ipynb").exists());
}

// =============================================================================
// GENERATION AND EXECUTION
// =============================================================================

#[test]
fn test_prompt_uses_template() {
    let temp = TempDir::new().unwrap();
    let generator = StubGenerator::new("print(2)");
    let executor = StubExecutor::with_stdout("2\n");
    let publisher = StubPublisher::succeeding();
    let runner = NotebookRunner::new(&generator, &executor, &publisher, temp.path(), TEMPLATE);

    runner.run("prints two").unwrap();

    let prompts = generator.prompts.borrow();
    assert_eq!(prompts.len(), 1);
    assert_eq!(
        prompts[0],
        "Write a clean Python script that prints two. Output only valid Python code."
    );
}

#[test]
fn test_executor_receives_stripped_code() {
    let temp = TempDir::new().unwrap();
    let generator = StubGenerator::new("```\nprint('run me')\n```");
    let executor = StubExecutor::with_stdout("run me\n");
    let publisher = StubPublisher::succeeding();
    let runner = NotebookRunner::new(&generator, &executor, &publisher, temp.path(), TEMPLATE);

    let report = runner.run("run me").unwrap();

    assert_eq!(executor.executed.borrow().as_slice(), ["print('run me')"]);
    assert_eq!(report.execution_output, "run me\n");
}

#[test]
fn test_output_key_preferred() {
    let temp = TempDir::new().unwrap();
    let generator = StubGenerator::new("raise SystemExit(1)");
    let executor = StubExecutor::new(ExecutionResult {
        output: Some("Traceback".to_string()),
        stdout: Some("partial".to_string()),
        ..ExecutionResult::default()
    });
    let publisher = StubPublisher::succeeding();
    let runner = NotebookRunner::new(&generator, &executor, &publisher, temp.path(), TEMPLATE);

    assert_eq!(runner.run("exit").unwrap().execution_output, "Traceback");
}

#[test]
fn test_placeholder_when_no_output() {
    let temp = TempDir::new().unwrap();
    let generator = StubGenerator::new("pass");
    let executor = StubExecutor::new(ExecutionResult::default());
    let publisher = StubPublisher::succeeding();
    let runner = NotebookRunner::new(&generator, &executor, &publisher, temp.path(), TEMPLATE);

    assert_eq!(runner.run("do nothing").unwrap().execution_output, NO_OUTPUT);
}

#[test]
fn test_generator_failure_propagates_before_save() {
    let temp = TempDir::new().unwrap();
    let staging = temp.path().join("notebooks");
    let generator = StubGenerator::failing();
    let executor = StubExecutor::with_stdout("");
    let publisher = StubPublisher::succeeding();
    let runner = NotebookRunner::new(&generator, &executor, &publisher, &staging, TEMPLATE);

    let err = runner.run("anything").unwrap_err();
    assert!(matches!(err, Error::Llm(_)));
    assert!(!staging.exists());
    assert!(executor.executed.borrow().is_empty());
}

// =============================================================================
// PUBLISH
// =============================================================================

#[test]
fn test_publish_success_returns_colab_link() {
    let temp = TempDir::new().unwrap();
    let generator = StubGenerator::new("print(3)");
    let executor = StubExecutor::with_stdout("3\n");
    let publisher = StubPublisher::succeeding();
    let runner = NotebookRunner::new(&generator, &executor, &publisher, temp.path(), TEMPLATE);

    let report = runner.run("print three").unwrap();

    assert_eq!(
        report.colab_link,
        "https://colab.research.google.com/github/octo/nb/blob/main/print_three.ipynb"
    );
    assert_eq!(publisher.published.borrow().as_slice(), [report.notebook_path.clone()]);
}

#[test]
fn test_publish_failure_is_reported_not_raised() {
    let temp = TempDir::new().unwrap();
    let generator = StubGenerator::new("print(4)");
    let executor = StubExecutor::with_stdout("4\n");
    let publisher = StubPublisher::failing();
    let runner = NotebookRunner::new(&generator, &executor, &publisher, temp.path(), TEMPLATE);

    let report = runner.run("print four").unwrap();

    assert!(report.colab_link.starts_with(PUBLISH_ERROR_PREFIX));
    assert!(report.colab_link.contains("GITHUB_TOKEN not found"));
    assert_eq!(report.execution_output, "4\n");
    assert!(report.notebook_path.exists());
}
