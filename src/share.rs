const TWEET_INTENT: &str = "https://twitter.com/intent/tweet?text=";

pub fn share_message(wpm: u64) -> String {
    format!("My Typing Speed is {wpm}. Let's see how fast you are!")
}

/// Tweet-intent url announcing a finished session's wpm
pub fn share_url(wpm: u64) -> String {
    format!("{TWEET_INTENT}{}", percent_encode(&share_message(wpm)))
}

// unreserved characters per rfc 3986 pass through, everything else is %XX
fn percent_encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 3);
    for b in text.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}
