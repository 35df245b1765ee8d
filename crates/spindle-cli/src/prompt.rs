//! Interactive entry of request tracks.

use std::io::{self, BufRead, Write};

use log::debug;

/// Prompt for `count` requests, one per line, and join them into a single
/// request list.
///
/// Each prompt is written to `output` as `R1: `, `R2: `, and so on. Input
/// ending early yields fewer values; the parser reports the shortfall.
pub fn read_requests(
    input: &mut impl BufRead,
    output: &mut impl Write,
    count: usize,
) -> io::Result<String> {
    let mut values = Vec::with_capacity(count);

    for index in 1..=count {
        write!(output, "R{index}: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            debug!(expected = count, read = values.len(); "Input ended before all requests were entered");
            break;
        }
        values.push(line.trim().to_string());
    }
    writeln!(output)?;

    Ok(values.join(", "))
}
