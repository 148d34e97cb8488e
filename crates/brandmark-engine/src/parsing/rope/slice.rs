use xi_rope::Rope;

/// Byte length of the prefix that ends with the last newline in the rope.
///
/// Everything past this offset is a line that is still being written.
pub fn complete_prefix_len(rope: &Rope) -> usize {
    let len = rope.len();
    if len == 0 {
        return 0;
    }
    // After a trailing newline `line_of_offset(len)` is the empty last line.
    rope.offset_of_line(rope.line_of_offset(len))
}
