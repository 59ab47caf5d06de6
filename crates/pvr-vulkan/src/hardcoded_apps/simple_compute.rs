//! USC program for the `simple-compute` demo.
//!
//! Single invocation workgroup; reads its inputs from the coefficient
//! registers and writes one result through the first storage buffer.

pub const SIMPLE_COMPUTE_SHADER: [u8; 64] = [
    0x58, 0x9a, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x01, 0x00, 0x00, 0x00, 0x04, 0x40, 0x8c, 0x28,
    0x68, 0xfe, 0x82, 0xff, 0x00, 0x00, 0x02, 0x00,
    0x44, 0xa0, 0x80, 0xc2, 0x00, 0x40, 0x06, 0x00,
    0x68, 0x42, 0xd0, 0x03, 0x81, 0x00, 0x01, 0x00,
    0x44, 0xa0, 0x80, 0xc2, 0x01, 0xc0, 0x06, 0x00,
    0x88, 0x00, 0x20, 0x03, 0x00, 0x8f, 0x04, 0x00,
    0x04, 0x80, 0xee, 0x00, 0xf2, 0xff, 0xff, 0xff,
];
