//! Card State Helpers
//!
//! Open/closed bookkeeping for expandable cards. Lives in page signals and
//! resets whenever the page is left.

/// Open `id` if closed, close it if open
pub fn toggle_open(open: &mut Vec<usize>, id: usize) {
    if let Some(pos) = open.iter().position(|&o| o == id) {
        open.remove(pos);
    } else {
        open.push(id);
    }
}

pub fn is_open(open: &[usize], id: usize) -> bool {
    open.contains(&id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_open() {
        let mut open = Vec::new();
        toggle_open(&mut open, 2);
        toggle_open(&mut open, 5);
        assert!(is_open(&open, 2));
        assert!(is_open(&open, 5));

        toggle_open(&mut open, 2);
        assert!(!is_open(&open, 2));
        assert_eq!(open, vec![5]);
    }
}
