//! Tokenize a Ymir snippet, print its tokens, and render it as HTML.

use ymir_highlight::{highlight, render_html, tokenize};

fn main() {
    let source = "\
import std::io;

#:[inline]
def add (a : i32, b : i32)-> i32 {
    a + b // sum
}
";

    let tokens = tokenize(source);
    for token in &tokens {
        if !token.is_plain() {
            println!("{:>12}  {:?}", token.category, token.text);
        }
    }

    println!();
    println!("{}", render_html(&tokens));

    // The code-block classifier works on whole words only.
    println!("{}", highlight("let mut x : i32 = 0;"));
}
