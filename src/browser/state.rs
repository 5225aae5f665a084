/// The quote collection together with the position of the reader.
///
/// The cursor always points at an existing quote while the collection is
/// non-empty. Once the last quote is removed the state is empty and every
/// mutation becomes a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BrowserState {
	quotes: Vec<String>,
	cursor: usize,
}

impl BrowserState {
	/// Build a state from a collection and a restored cursor.
	///
	/// A cursor outside `0..quotes.len()` is reset to the first quote.
	#[must_use]
	pub fn new(quotes: Vec<String>, cursor: i64) -> Self {
		let cursor = usize::try_from(cursor)
			.ok()
			.filter(|&cursor| cursor < quotes.len())
			.unwrap_or(0);
		Self { quotes, cursor }
	}

	#[must_use]
	pub fn quotes(&self) -> &[String] {
		&self.quotes
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.quotes.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.quotes.is_empty()
	}

	/// Index of the current quote, or `None` in the empty state.
	#[must_use]
	pub fn cursor(&self) -> Option<usize> {
		(!self.is_empty()).then_some(self.cursor)
	}

	#[must_use]
	pub fn current(&self) -> Option<&str> {
		self.quotes.get(self.cursor).map(String::as_str)
	}

	#[must_use]
	pub fn has_previous(&self) -> bool {
		!self.is_empty() && self.cursor > 0
	}

	#[must_use]
	pub fn has_next(&self) -> bool {
		self.cursor + 1 < self.quotes.len()
	}

	/// Step forward. Returns `false` at the last quote.
	pub fn next(&mut self) -> bool {
		if !self.has_next() {
			return false;
		}
		self.cursor += 1;
		true
	}

	/// Step backward. Returns `false` at the first quote.
	pub fn previous(&mut self) -> bool {
		if !self.has_previous() {
			return false;
		}
		self.cursor -= 1;
		true
	}

	/// Remove the current quote and return it.
	///
	/// The cursor stays on the same index unless that fell off the end, in
	/// which case it moves to the new last quote.
	pub fn delete_current(&mut self) -> Option<String> {
		if self.is_empty() {
			return None;
		}
		let removed = self.quotes.remove(self.cursor);
		if self.cursor >= self.quotes.len() {
			self.cursor = self.quotes.len().saturating_sub(1);
		}
		Some(removed)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn state(quotes: &[&str], cursor: i64) -> BrowserState {
		BrowserState::new(quotes.iter().map(|q| q.to_string()).collect(), cursor)
	}

	#[test]
	fn restored_cursor_out_of_range_resets_to_first() {
		assert_eq!(state(&["A", "B"], 5).cursor(), Some(0));
		assert_eq!(state(&["A", "B"], 2).cursor(), Some(0));
		assert_eq!(state(&["A", "B"], -1).cursor(), Some(0));
		assert_eq!(state(&["A", "B"], 1).cursor(), Some(1));
	}

	#[test]
	fn empty_state_has_no_cursor() {
		let mut empty = state(&[], 3);
		assert_eq!(empty.cursor(), None);
		assert_eq!(empty.current(), None);
		assert!(!empty.next());
		assert!(!empty.previous());
		assert_eq!(empty.delete_current(), None);
	}

	#[test]
	fn navigation_saturates_at_both_ends() {
		let mut s = state(&["A", "B", "C"], 0);
		assert!(!s.previous());
		assert_eq!(s.cursor(), Some(0));

		assert!(s.next());
		assert!(s.next());
		assert!(!s.next());
		assert_eq!(s.current(), Some("C"));
	}

	#[test]
	fn next_and_previous_invert_each_other_inside_the_list() {
		for start in 1..3 {
			let mut s = state(&["A", "B", "C", "D"], start);
			assert!(s.next());
			assert!(s.previous());
			assert_eq!(s.cursor(), Some(start as usize));

			assert!(s.previous());
			assert!(s.next());
			assert_eq!(s.cursor(), Some(start as usize));
		}
	}

	#[test]
	fn deleting_in_the_middle_keeps_the_index() {
		let mut s = state(&["A", "B", "C"], 1);
		assert_eq!(s.delete_current().as_deref(), Some("B"));
		assert_eq!(s.quotes(), ["A", "C"]);
		assert_eq!(s.current(), Some("C"));
	}

	#[test]
	fn deleting_the_last_quote_moves_back() {
		let mut s = state(&["A", "B", "C"], 2);
		s.delete_current();
		assert_eq!(s.cursor(), Some(1));
		assert_eq!(s.current(), Some("B"));
	}

	#[test]
	fn deleting_the_only_quote_empties_the_state() {
		let mut s = state(&["A"], 0);
		assert_eq!(s.delete_current().as_deref(), Some("A"));
		assert!(s.is_empty());
		assert_eq!(s.cursor(), None);
		assert!(!s.has_next());
		assert!(!s.has_previous());
		assert_eq!(s.delete_current(), None);
	}

	#[test]
	fn cursor_stays_in_range_for_every_short_action_sequence() {
		// 0 = next, 1 = previous, 2 = delete
		const STEPS: u32 = 6;
		for seed in 0..3u32.pow(STEPS) {
			let mut s = state(&["A", "B", "C", "D"], 2);
			let mut code = seed;
			for _ in 0..STEPS {
				match code % 3 {
					0 => {
						s.next();
					}
					1 => {
						s.previous();
					}
					_ => {
						s.delete_current();
					}
				}
				code /= 3;

				match s.cursor() {
					Some(cursor) => assert!(cursor < s.len(), "seed {seed}: {s:?}"),
					None => assert!(s.is_empty(), "seed {seed}: {s:?}"),
				}
			}
		}
	}
}
