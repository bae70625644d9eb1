//! Build script to embed the default word lists
//!
//! Reads the JSON word lists under `data/` and generates Rust source with const
//! arrays, so the binary works without any data files next to it.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const LOCALES: &[&str] = &["english", "spanish"];
const LISTS: &[(&str, &str)] = &[("targets", "TARGETS"), ("dictionary", "DICTIONARY")];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("word_lists.rs");

    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word lists").unwrap();
    writeln!(output).unwrap();

    for locale in LOCALES {
        for (file, suffix) in LISTS {
            let input_path = format!("data/{locale}/{file}.json");
            let const_name = format!("{}_{suffix}", locale.to_uppercase());
            generate_word_list(&input_path, &mut output, &const_name);
            println!("cargo:rerun-if-changed={input_path}");
        }
    }
}

fn generate_word_list(input_path: &str, output: &mut fs::File, const_name: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<String> = serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("{input_path} is not a JSON array of strings: {e}"));

    writeln!(output, "/// Words from `{input_path}` ({} words)", words.len()).unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in &words {
        writeln!(output, "    {:?},", word.trim()).unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
}
