// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_mbox(messages: usize) -> String {
    let mut content = String::new();
    for i in 0..messages {
        content.push_str(&format!(
            "From sender{i}@example.com Mon Jan {:02} 12:00:00 2024\n",
            i % 28 + 1
        ));
        content.push_str(&format!("Subject: message {i}\n"));
        content.push_str("Received: from relay.example.com\n");
        content.push_str("  by mx.example.com with SMTP\n");
        content.push('\n');
        for line in 0..6 {
            content.push_str(&format!("Body line {line} of message {i}, plain text.\n"));
        }
        content.push('\n');
    }
    content
}

/// Line index of the `Subject:` header of message `i`.
#[allow(dead_code)]
pub fn subject_line(i: usize) -> usize {
    i * 12 + 1
}
