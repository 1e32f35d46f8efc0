//! The `quizbank init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    write_if_missing(Path::new("quizbank.toml"), SAMPLE_CONFIG)?;

    std::fs::create_dir_all("question-banks")?;
    write_if_missing(Path::new("question-banks/example.toml"), EXAMPLE_TOML_BANK)?;
    write_if_missing(Path::new("question-banks/example.md"), EXAMPLE_MARKDOWN_BANK)?;

    println!("\nNext steps:");
    println!("  1. Add questions under question-banks/");
    println!("  2. Run: quizbank validate");
    println!("  3. Run: quizbank sample 3");

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
    } else {
        std::fs::write(path, content)?;
        println!("Created {}", path.display());
    }
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizbank configuration

catalog = "./question-banks"
sample_size = 5
# seed = 42
"#;

const EXAMPLE_TOML_BANK: &str = r#"[bank]
id = "example"
name = "Example Question Bank"
description = "A couple of questions to get started"
default_section = "arrays"

[[questions]]
id = "example-arrays-1"
prompt = "How do you access the third element of an array?"
code_sample = """
const arr = ["a", "b", "c", "d"];
console.log(arr[2]);
"""
expected_answer = "Arrays are zero-indexed, so arr[2] logs \"c\"."
tags = ["basics"]

[[questions]]
id = "example-strings-1"
section = "strings"
prompt = "Reverse a string without using a loop."
code_sample = """
const reverse = (s) => s.split("").reverse().join("");
"""
expected_answer = "Split into characters, reverse the array, join back."
tags = ["basics"]
"#;

const EXAMPLE_MARKDOWN_BANK: &str = r#"# Example Markdown Bank

## Section: closures

### What does this print? {#example-closures-1}

```js
for (var i = 0; i < 3; i++) {
  setTimeout(() => console.log(i), 0);
}
```

Tags: scope, event-loop

Prints `3` three times: `var` is function-scoped, so every callback sees the final `i`.
"#;
