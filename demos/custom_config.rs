//! Swap in a custom vocabulary and rule table from TOML, and show how
//! invalid tables are reported.

use ymir_highlight::{Config, ConfigError, render_html};

const CONFIG: &str = r#"
[vocabulary]
keywords = ["proc", "end"]
types = ["int"]

[[grammar.rules]]
category = "comment"
patterns = [{ kind = "line-comment" }]

[[grammar.rules]]
category = "keyword"
patterns = [{ kind = "words", words = ["proc", "end"] }]

[[grammar.rules]]
category = "number"
patterns = [{ kind = "number" }]
"#;

fn main() {
    match Config::from_toml_str(CONFIG) {
        Ok(config) => {
            let source = "proc main // entry\n  42\nend";
            println!("{}", render_html(&config.tokenize(source)));
            println!("{}", config.highlight("proc x int"));
        }
        Err(e) => println!("Config error: {e}"),
    }

    println!();

    // Each of these tables is rejected while loading.
    let invalid = [
        "[[grammar.rules]]\ncategory = \"keyword\"\npatterns = []\n",
        "[[grammar.rules]]\ncategory = \"plain\"\npatterns = [{ kind = \"number\" }]\n",
        "[vocabulary]\nkeywords = [\"\"]\n",
        "[[grammar.rules]]\ncategory = \"keyword\"\npatterns = [{ kind = \"regex\" }]\n",
    ];
    for input in invalid {
        match Config::from_toml_str(input) {
            Ok(_) => println!("Loaded OK (unexpected)"),
            Err(ConfigError::Toml(e)) => println!("TOML error: {}", e.message()),
            Err(e) => println!("Rejected: {e}"),
        }
    }
}
