use std::io::{self, BufRead, ErrorKind};

/// Exit code for allocation failure while buffering input. The shell cannot
/// continue without buffer guarantees, so this terminates the process.
const EXIT_ALLOC_FAILURE: i32 = 71;

/// Read one line from `input`, up to `limit` bytes, excluding the newline.
///
/// Returns `Ok(None)` on end-of-input with nothing read, which the caller
/// treats as a request to terminate the loop. A line longer than `limit` is
/// truncated and the rest of it is consumed and discarded, so stale bytes
/// are never replayed as the next command.
pub fn read_line<R: BufRead>(input: &mut R, limit: usize) -> io::Result<Option<String>> {
    let mut buf: Vec<u8> = Vec::new();
    let mut byte = [0u8; 1];
    let mut saw_any = false;

    loop {
        let n = match input.read(&mut byte) {
            Ok(n) => n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };
        if n == 0 {
            // End of input; a partial final line is still handed back.
            return Ok(saw_any.then(|| String::from_utf8_lossy(&buf).into_owned()));
        }
        saw_any = true;

        if byte[0] == b'\n' {
            return Ok(Some(String::from_utf8_lossy(&buf).into_owned()));
        }
        if buf.len() >= limit {
            continue;
        }
        if buf.try_reserve(1).is_err() {
            eprintln!("msh: out of memory while reading input");
            std::process::exit(EXIT_ALLOC_FAILURE);
        }
        buf.push(byte[0]);
    }
}
