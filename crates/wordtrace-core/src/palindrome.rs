//! Palindrome check for guessed words.

/// Returns whether `word` reads the same forward and backward.
///
/// Uses an iterative two-pointer comparison, so the input length never
/// affects stack depth. The comparison is case-sensitive and literal: the
/// caller is expected to normalize (uppercase) the word first, exactly as
/// the game session's guess handling does.
///
/// The empty string and single characters are palindromes.
///
/// # Examples
///
/// ```
/// use wordtrace_core::is_palindrome;
///
/// assert!(is_palindrome("RACECAR"));
/// assert!(is_palindrome(""));
/// assert!(is_palindrome("A"));
/// assert!(!is_palindrome("BOGGLE"));
/// assert!(!is_palindrome("Aa")); // no case folding
/// ```
#[must_use]
pub fn is_palindrome(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    if chars.is_empty() {
        return true;
    }
    let mut i = 0;
    let mut j = chars.len() - 1;
    while i < j {
        if chars[i] != chars[j] {
            return false;
        }
        i += 1;
        j -= 1;
    }
    true
}
