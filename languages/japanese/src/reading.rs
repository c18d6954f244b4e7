/// Interleave a headword with its furigana slots, e.g. `食べる` + `[た, "", ""]` → `食(た)べる`.
///
/// Slot `i` annotates character `i` of the writing; an empty slot leaves the character bare.
/// Returns `None` when the slot count differs from the character count, since the
/// positional pairing would be meaningless.
pub fn reconstruct_reading<S: AsRef<str>>(writing: &str, slots: &[S]) -> Option<String> {
    let chars: Vec<char> = writing.chars().collect();
    if chars.len() != slots.len() {
        return None;
    }

    let mut reading = String::with_capacity(writing.len() * 3);
    for (ch, slot) in chars.into_iter().zip(slots) {
        let annotation = slot.as_ref().trim();
        reading.push(ch);
        if !annotation.is_empty() {
            reading.push('(');
            reading.push_str(annotation);
            reading.push(')');
        }
    }

    Some(reading)
}
