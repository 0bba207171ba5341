#![no_main]

use libfuzzer_sys::fuzz_target;

use strassen_core::input::parse_operands;

fuzz_target!(|data: &[u8]| {
    let Some((&mode, rest)) = data.split_first() else {
        return;
    };
    // Odd modes take n from the next eight bytes so huge dimensions are hit.
    let (n, body) = if mode % 2 == 1 && rest.len() >= 8 {
        let (head, body) = rest.split_at(8);
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(head);
        let Ok(n) = usize::try_from(u64::from_le_bytes(bytes)) else {
            return;
        };
        (n, body)
    } else {
        (usize::from(mode / 2 % 16), rest)
    };
    let Ok(text) = std::str::from_utf8(body) else {
        return;
    };

    // Should not panic or abort; on success both operands are n x n.
    if let Ok((a, b)) = parse_operands::<i64>(text, n) {
        assert_eq!((a.rows(), a.cols()), (n, n));
        assert_eq!((b.rows(), b.cols()), (n, n));
    }
});
