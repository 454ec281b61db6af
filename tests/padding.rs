use derived_sha::ShaError;
use derived_sha::hash::padding::{block_count, block_len, check_length, length_field_len, pad};

#[test]
fn block_and_field_sizes() {
    assert_eq!(block_len::<u32>(), 64);
    assert_eq!(block_len::<u64>(), 128);
    assert_eq!(length_field_len::<u32>(), 8);
    assert_eq!(length_field_len::<u64>(), 16);
}

#[test]
fn empty_message_is_one_block() {
    let blocks = pad::<u32>(&[]);

    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0][0], 0x8000_0000);
    assert!(blocks[0][1..].iter().all(|&w| w == 0));
}

#[test]
fn abc_layout_32() {
    let blocks = pad::<u32>(b"abc");

    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0][0], 0x6162_6380);
    assert!(blocks[0][1..15].iter().all(|&w| w == 0));
    assert_eq!(blocks[0][15], 24);
}

#[test]
fn abc_layout_64() {
    let blocks = pad::<u64>(b"abc");

    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0][0], 0x6162_6380_0000_0000);
    assert!(blocks[0][1..14].iter().all(|&w| w == 0));
    // 128-bit length field: high word zero, low word 24
    assert_eq!(blocks[0][14], 0);
    assert_eq!(blocks[0][15], 24);
}

#[test]
fn words_are_big_endian() {
    let message: Vec<u8> = (1..=8).collect();

    let words32 = pad::<u32>(&message);
    assert_eq!(words32[0][0], 0x0102_0304);
    assert_eq!(words32[0][1], 0x0506_0708);

    let words64 = pad::<u64>(&message);
    assert_eq!(words64[0][0], 0x0102_0304_0506_0708);
}

#[test]
fn boundary_block_counts_32() {
    // 55 bytes leaves exactly room for 0x80 and the 8-byte length
    assert_eq!(block_count::<u32>(55), 1);
    assert_eq!(block_count::<u32>(56), 2);
    assert_eq!(block_count::<u32>(63), 2);
    assert_eq!(block_count::<u32>(64), 2);
    assert_eq!(block_count::<u32>(119), 2);
    assert_eq!(block_count::<u32>(120), 3);
}

#[test]
fn boundary_block_counts_64() {
    assert_eq!(block_count::<u64>(111), 1);
    assert_eq!(block_count::<u64>(112), 2);
    assert_eq!(block_count::<u64>(127), 2);
    assert_eq!(block_count::<u64>(128), 2);
    assert_eq!(block_count::<u64>(239), 2);
    assert_eq!(block_count::<u64>(240), 3);
}

#[test]
fn pad_agrees_with_block_count() {
    for len in 0..300 {
        let message = vec![0x5a; len];

        assert_eq!(pad::<u32>(&message).len(), block_count::<u32>(len), "u32, {len} bytes");
        assert_eq!(pad::<u64>(&message).len(), block_count::<u64>(len), "u64, {len} bytes");
    }
}

#[test]
fn one_short_of_and_at_block_boundary() {
    let short = pad::<u32>(&[0xff; 63]);
    assert_eq!(short.len(), 2);
    assert_eq!(short[0][15], 0xffff_ff80);
    assert_eq!(short[1][15], 63 * 8);

    let exact = pad::<u32>(&[0xff; 64]);
    assert_eq!(exact.len(), 2);
    assert_eq!(exact[1][0], 0x8000_0000);
    assert_eq!(exact[1][15], 64 * 8);
}

#[test]
fn length_limits() {
    assert_eq!(check_length::<u32>(0), Ok(()));
    assert_eq!(check_length::<u64>(usize::MAX), Ok(()));

    if usize::BITS == 64 {
        let limit = (1u64 << 61) as usize;

        assert_eq!(check_length::<u32>(limit - 1), Ok(()));
        assert_eq!(
            check_length::<u32>(limit),
            Err(ShaError::MessageTooLong { bytes: limit })
        );
    }
}
