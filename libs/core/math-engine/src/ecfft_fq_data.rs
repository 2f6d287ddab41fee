// [libs/core/math-engine/src/ecfft_fq_data.rs]
// Datos de configuración ECFFT para F_q (véase ecfft_fp_data.rs).
#![allow(clippy::all)]
#![allow(missing_docs)]

pub const ECFFT_FQ_LOG_DOMAIN: usize = 8;
pub const ECFFT_FQ_DOMAIN_SIZE: usize = 256;

pub const ECFFT_FQ_COSET: [[u8; 32]; 256] = [
    [0x33, 0xbe, 0x8d, 0xc3, 0xd1, 0xbb, 0xb2, 0x62, 0xfa, 0x59, 0x10, 0xa5, 0x16, 0x4b, 0x0c, 0x78, 0x1c, 0xef, 0xd0, 0x68, 0x53, 0x47, 0x81, 0xdf, 0xc3, 0xdb, 0xb5, 0x32, 0xcb, 0xbe, 0x15, 0x19],
    [0xa3, 0x3b, 0x3c, 0xad, 0xcb, 0x82, 0xe3, 0x65, 0x99, 0x1d, 0x23, 0xf8, 0x92, 0xdf, 0x60, 0x0e, 0x58, 0xd5, 0x80, 0x6d, 0xba, 0x56, 0x52, 0x71, 0x5d, 0xef, 0xd2, 0xd9, 0x33, 0xed, 0xc3, 0x39],
    [0x7b, 0x6d, 0x3c, 0x09, 0x7f, 0xb1, 0x2d, 0xe6, 0x69, 0xfc, 0x1c, 0x87, 0x2d, 0x3a, 0x74, 0x53, 0xc4, 0xfd, 0x98, 0x33, 0x30, 0xd9, 0xc8, 0x3c, 0xd2, 0x37, 0x88, 0x7e, 0xe9, 0xd2, 0x9b, 0x50],
    [0xf6, 0x0e, 0x7b, 0x9c, 0xd7, 0xc5, 0x30, 0xc1, 0x8d, 0xcd, 0x1c, 0xdb, 0x36, 0xc5, 0x8a, 0xa4, 0xc9, 0x16, 0xe1, 0x85, 0x5f, 0x16, 0x36, 0x31, 0x9c, 0x3a, 0x6c, 0xde, 0xc4, 0x8e, 0x7d, 0x33],
    [0xa2, 0xcf, 0xa7, 0x53, 0x5a, 0x57, 0xe1, 0x79, 0x93, 0x78, 0xdf, 0x20, 0xf5, 0x9a, 0xfb, 0x6c, 0x0f, 0xc4, 0x06, 0x77, 0x98, 0xe9, 0xd1, 0xbe, 0xb4, 0x6b, 0x1a, 0xb7, 0x81, 0x77, 0x01, 0x6a],
    [0x24, 0xd8, 0x3b, 0xb5, 0xf7, 0xe0, 0x2d, 0xa8, 0xa9, 0x23, 0x68, 0x09, 0x9e, 0x6a, 0xb8, 0x85, 0x70, 0x61, 0xa2, 0x3f, 0x5a, 0xd6, 0xb9, 0xc0, 0xbb, 0xbc, 0x1c, 0x41, 0x71, 0x22, 0x35, 0x39],
    [0x30, 0x72, 0xb9, 0x78, 0xb1, 0x93, 0xb9, 0xdf, 0x49, 0x81, 0x98, 0xdc, 0x80, 0xf5, 0x07, 0x7e, 0xb4, 0x4f, 0x5a, 0x45, 0x29, 0xf9, 0xcb, 0xf7, 0x05, 0x20, 0xbf, 0x0b, 0x28, 0x6c, 0x0c, 0x77],
    [0xe4, 0x38, 0xe6, 0xe5, 0xa0, 0xd2, 0x5e, 0x2d, 0xb3, 0xe5, 0x83, 0xde, 0xf6, 0xa0, 0x72, 0xa0, 0xa1, 0x92, 0x4c, 0xc5, 0x9f, 0x46, 0x90, 0x19, 0x84, 0x71, 0xe7, 0x09, 0x80, 0xdb, 0xa2, 0x30],
    [0xf3, 0xf0, 0xbd, 0x42, 0x81, 0x97, 0xf9, 0x02, 0x65, 0x63, 0x42, 0x2d, 0x7d, 0x9a, 0x86, 0x36, 0x08, 0x6e, 0x3c, 0xea, 0xe0, 0xae, 0xa0, 0x33, 0x62, 0x56, 0xf1, 0x1f, 0xb9, 0x1e, 0xce, 0x2d],
    [0xd7, 0x88, 0xa3, 0x20, 0xc2, 0xa9, 0xe5, 0xe0, 0x70, 0x2e, 0x7c, 0x38, 0x79, 0xe7, 0x72, 0xb0, 0xfa, 0x41, 0x7e, 0xca, 0x57, 0x74, 0x78, 0xa7, 0x62, 0x9b, 0xb1, 0x32, 0x79, 0xba, 0xc5, 0x37],
    [0x52, 0x84, 0xbe, 0xfb, 0x0b, 0xcf, 0xdf, 0x3c, 0xee, 0x3f, 0xe3, 0x4e, 0x9c, 0x29, 0x25, 0xe5, 0x1e, 0xb8, 0x6b, 0xa6, 0x56, 0xd3, 0xc7, 0x59, 0xd4, 0xd4, 0x1e, 0x31, 0x40, 0xd5, 0x3c, 0x26],
    [0xf8, 0x29, 0xc4, 0x4a, 0xfd, 0xf1, 0x1f, 0x56, 0xf9, 0x43, 0x8b, 0xdd, 0xe3, 0x4f, 0xc2, 0x75, 0x53, 0x1b, 0x60, 0xff, 0xa9, 0x5b, 0x12, 0xc4, 0x88, 0x97, 0x0a, 0x3e, 0xbf, 0xe5, 0xce, 0x7c],
    [0x62, 0x8f, 0x78, 0x59, 0xa9, 0xec, 0xdc, 0xc4, 0xb7, 0xc2, 0xb0, 0x0e, 0xff, 0x37, 0xff, 0x9c, 0xb8, 0x08, 0xd1, 0x31, 0xcc, 0x03, 0xe8, 0xca, 0xcf, 0x4c, 0x4b, 0x62, 0xf2, 0xb2, 0x1d, 0x32],
    [0x5a, 0xc0, 0x68, 0x85, 0x33, 0xa9, 0x31, 0xc3, 0x2a, 0xc4, 0xa4, 0x92, 0x69, 0xb6, 0x9f, 0x58, 0xc4, 0x96, 0x75, 0x59, 0x0c, 0x27, 0xcc, 0x68, 0x78, 0xd2, 0x75, 0x28, 0x55, 0x33, 0xcc, 0x1e],
    [0xac, 0x8f, 0x42, 0x8e, 0x64, 0xf3, 0xe1, 0xe0, 0xa3, 0x98, 0x52, 0x59, 0x40, 0xb9, 0xf5, 0xe2, 0x9a, 0xc2, 0x59, 0x58, 0x64, 0xd4, 0x6f, 0x1c, 0x42, 0x35, 0x24, 0xf9, 0x37, 0xc8, 0x5c, 0x19],
    [0x22, 0x9f, 0x56, 0x96, 0x2a, 0x19, 0x0a, 0x53, 0x36, 0xac, 0xdf, 0x03, 0x75, 0x6d, 0xb6, 0x14, 0xf4, 0x42, 0x03, 0xf5, 0x3a, 0x39, 0x79, 0xaa, 0x15, 0x55, 0x3e, 0xf8, 0xbe, 0x9e, 0x8f, 0x40],
    [0x82, 0xa7, 0xd1, 0x63, 0x98, 0xe3, 0xf7, 0x91, 0x66, 0x8d, 0xc9, 0xfa, 0x80, 0x01, 0xb3, 0x51, 0x3e, 0xa3, 0xe3, 0x1a, 0xef, 0xec, 0xb4, 0x49, 0x19, 0xa7, 0x2d, 0xeb, 0x07, 0xef, 0x66, 0x5e],
    [0xc7, 0xf1, 0x3a, 0x2b, 0x3c, 0xe4, 0x78, 0x40, 0x78, 0x11, 0x31, 0xdd, 0xd0, 0x00, 0x37, 0x98, 0xf8, 0xa0, 0x69, 0xad, 0xcc, 0x61, 0xdb, 0x7f, 0xc8, 0x8f, 0x55, 0xf5, 0xbf, 0x8c, 0x00, 0x5b],
    [0x92, 0x48, 0x62, 0x4d, 0xa8, 0x70, 0x99, 0xfd, 0x8e, 0xd7, 0x67, 0xa7, 0x00, 0x41, 0xb1, 0xa6, 0xb3, 0x53, 0xc9, 0xf0, 0x10, 0x7e, 0x56, 0xe3, 0x6d, 0x3b, 0xfc, 0x20, 0xaf, 0xe5, 0xa0, 0x47],
    [0x8b, 0xfb, 0x62, 0x2f, 0x01, 0xfb, 0x03, 0xaa, 0x72, 0x7b, 0x9b, 0x8e, 0x6d, 0x5b, 0x7e, 0x77, 0x72, 0xd1, 0x39, 0x22, 0x5f, 0xea, 0x90, 0x70, 0x58, 0x49, 0xf6, 0x0d, 0x02, 0xdc, 0x4f, 0x70],
    [0xdc, 0x52, 0xf9, 0x03, 0xd6, 0xe4, 0x02, 0x2c, 0x77, 0x66, 0xd2, 0x58, 0x65, 0x5e, 0xd0, 0xb9, 0x39, 0xcb, 0x63, 0xa6, 0x50, 0xf2, 0xbe, 0x71, 0xd5, 0x75, 0x42, 0x77, 0x91, 0xe6, 0xab, 0x5f],
    [0x71, 0x7a, 0xa8, 0x9a, 0x99, 0xfb, 0xd3, 0x22, 0x28, 0x1a, 0xc0, 0x06, 0x11, 0xca, 0xf6, 0x7f, 0xe3, 0x5d, 0xeb, 0x19, 0xc2, 0x26, 0x10, 0x30, 0xac, 0xc4, 0xbf, 0x90, 0xe3, 0x86, 0x0c, 0x67],
    [0x76, 0x52, 0x24, 0x28, 0x35, 0x54, 0x16, 0xa3, 0xc1, 0x7e, 0x48, 0x03, 0x84, 0x68, 0xd0, 0xe1, 0x01, 0x3b, 0xc6, 0x0f, 0x60, 0x2b, 0x1c, 0xce, 0x32, 0xc9, 0xe1, 0xa6, 0xee, 0x9a, 0x62, 0x6e],
    [0x77, 0xfa, 0xbd, 0xf5, 0x43, 0xed, 0x64, 0x16, 0x61, 0xd0, 0x0d, 0x7f, 0x25, 0x1b, 0x3a, 0x62, 0xe1, 0x2b, 0x9c, 0x01, 0x68, 0x56, 0xf8, 0x5d, 0xf5, 0x10, 0xdd, 0x31, 0x91, 0x91, 0xde, 0x42],
    [0xed, 0x2c, 0x69, 0xae, 0x3d, 0x22, 0xc8, 0xac, 0xd6, 0x3e, 0xeb, 0xca, 0xf9, 0x1f, 0x25, 0x16, 0x1a, 0x28, 0xbf, 0x34, 0xa2, 0xdd, 0x85, 0x69, 0xba, 0x49, 0xad, 0x77, 0xa4, 0x79, 0x1c, 0x7b],
    [0xce, 0x81, 0x4b, 0x09, 0x4f, 0x62, 0xe6, 0xed, 0xc3, 0x7f, 0x4d, 0x8a, 0x47, 0x10, 0x0d, 0x41, 0xb5, 0x4b, 0x8e, 0xc1, 0x20, 0x70, 0x6e, 0x6d, 0xc7, 0x65, 0xe5, 0x7f, 0xd8, 0x80, 0x2d, 0x1f],
    [0xfb, 0xee, 0x07, 0xc9, 0xb8, 0x32, 0x82, 0xa6, 0xc5, 0xbd, 0xf7, 0x3b, 0x18, 0x28, 0x95, 0xd9, 0xf4, 0x11, 0x81, 0xaa, 0xc1, 0x52, 0x4a, 0xf7, 0xf0, 0xdd, 0x80, 0x78, 0x6e, 0x39, 0x74, 0x78],
    [0x15, 0xf6, 0x84, 0x9a, 0x45, 0xea, 0x3b, 0x2c, 0xaa, 0x2a, 0xa4, 0x12, 0x41, 0x08, 0x89, 0x39, 0xd2, 0x61, 0x32, 0x74, 0xf5, 0xbc, 0x42, 0x78, 0x0d, 0x96, 0xb9, 0x9e, 0xc8, 0x9b, 0x06, 0x65],
    [0xe0, 0xb4, 0xf2, 0x3b, 0x62, 0xad, 0x33, 0x15, 0x0c, 0xb9, 0xce, 0x8d, 0x72, 0x75, 0x29, 0x35, 0xc5, 0x12, 0x09, 0x05, 0xb0, 0x04, 0xd7, 0x0a, 0x6d, 0x71, 0xff, 0x6a, 0xb7, 0xe0, 0xb6, 0x7b],
    [0x21, 0xab, 0xf2, 0xf0, 0x31, 0xe7, 0x60, 0x0f, 0x92, 0x19, 0xa5, 0xa5, 0x80, 0xfd, 0x20, 0x50, 0x21, 0xcb, 0x92, 0x81, 0xbc, 0x23, 0xaa, 0xa0, 0xbb, 0x25, 0xff, 0xde, 0x0c, 0x29, 0x96, 0x7d],
    [0xbe, 0x10, 0x8f, 0xb1, 0xae, 0x34, 0x58, 0x98, 0xc6, 0x6a, 0x47, 0x82, 0x93, 0x0a, 0x54, 0xa4, 0xeb, 0x83, 0x0c, 0x60, 0x7c, 0xb1, 0xd4, 0xe5, 0xde, 0x4a, 0xae, 0xdf, 0x85, 0xe2, 0x53, 0x32],
    [0x9a, 0xcf, 0x77, 0x90, 0x5a, 0x67, 0x4c, 0xda, 0xb3, 0x7e, 0xd0, 0x7c, 0xac, 0xe5, 0xbc, 0xf0, 0xce, 0x5f, 0x14, 0x5f, 0x14, 0xc2, 0x84, 0x4f, 0x68, 0x0f, 0x1c, 0x27, 0x28, 0x8e, 0xf8, 0x1f],
    [0x9a, 0xe2, 0xc2, 0x30, 0x25, 0x01, 0x9f, 0x19, 0x7a, 0x80, 0x3f, 0x9a, 0x7f, 0x9c, 0x1e, 0x8d, 0x3f, 0x51, 0x8d, 0x89, 0x69, 0x2f, 0x1e, 0xbc, 0xa8, 0x2e, 0x4a, 0xc6, 0xe3, 0x13, 0xde, 0x47],
    [0xb5, 0xea, 0xf8, 0x72, 0xcd, 0xac, 0xf4, 0x7e, 0x54, 0x1c, 0x6f, 0x62, 0xeb, 0xcd, 0xfa, 0x89, 0xa6, 0x14, 0x29, 0x8e, 0x2e, 0x29, 0x78, 0x1e, 0x15, 0x64, 0x54, 0x40, 0x85, 0x36, 0x25, 0x69],
    [0xa3, 0xbc, 0x29, 0xf6, 0x36, 0xaa, 0xe2, 0x3e, 0x7d, 0x1b, 0xa1, 0xa2, 0x45, 0xfb, 0x2b, 0xeb, 0x80, 0x30, 0xfd, 0x4c, 0x1e, 0x50, 0x48, 0xa9, 0xba, 0x93, 0xdc, 0x7d, 0x3a, 0x19, 0x31, 0x46],
    [0x94, 0xd9, 0x3c, 0xd7, 0xe4, 0xc8, 0xbd, 0x1e, 0xf0, 0xd2, 0x6d, 0xf3, 0xb4, 0x7c, 0x2c, 0x9d, 0xba, 0x86, 0x2b, 0xb3, 0xd8, 0x5b, 0x59, 0xf9, 0x76, 0x1e, 0x9d, 0xe0, 0xde, 0x8e, 0xa7, 0x23],
    [0xaf, 0xb8, 0x80, 0xce, 0xc7, 0xcc, 0x75, 0x38, 0xe0, 0xee, 0x09, 0x5e, 0xb9, 0x1d, 0x00, 0x9b, 0xb8, 0x51, 0xf6, 0x6a, 0x7c, 0x0d, 0x41, 0x9e, 0x0c, 0x89, 0x10, 0x77, 0x01, 0x2b, 0x01, 0x13],
    [0x15, 0x06, 0x54, 0x0d, 0x87, 0xfc, 0x5d, 0xf7, 0x8a, 0xae, 0x6a, 0x97, 0x7b, 0xfe, 0x9d, 0xc1, 0x28, 0xd9, 0x61, 0x8d, 0xbf, 0xc8, 0x68, 0x33, 0x83, 0x9d, 0x7e, 0xc9, 0x80, 0x09, 0x9b, 0x3c],
    [0xbd, 0x0d, 0x03, 0x57, 0x79, 0x6c, 0x75, 0x57, 0x0e, 0xa7, 0x2a, 0xfa, 0xf5, 0xa3, 0xd8, 0x3c, 0x13, 0xf1, 0x1d, 0xbd, 0x6e, 0x1e, 0xde, 0x9f, 0x38, 0x1d, 0x30, 0x94, 0x2d, 0xad, 0x87, 0x1b],
    [0xca, 0x98, 0x44, 0x3a, 0x03, 0x14, 0x20, 0x15, 0x37, 0xe0, 0x18, 0xef, 0x5a, 0x86, 0x4f, 0x5f, 0x3a, 0x4a, 0xf7, 0xae, 0x63, 0xc8, 0xbe, 0x41, 0x67, 0x3c, 0x4a, 0xa2, 0x09, 0x76, 0xfe, 0x73],
    [0x14, 0xab, 0x99, 0x31, 0x0e, 0x80, 0x13, 0xd0, 0xa5, 0xfd, 0xbb, 0x32, 0x6b, 0xbf, 0x34, 0x4d, 0xac, 0x6e, 0x3f, 0x32, 0xf5, 0xfd, 0x5b, 0x28, 0x62, 0xa3, 0x10, 0xeb, 0x50, 0x1e, 0x5c, 0x77],
    [0xe6, 0x5b, 0x63, 0x71, 0x4f, 0x4c, 0x41, 0x05, 0xa1, 0x84, 0x81, 0xb3, 0x57, 0x1c, 0x90, 0x0b, 0xe4, 0xff, 0x15, 0xb1, 0x6b, 0x9d, 0xf9, 0x57, 0xe4, 0xdb, 0xee, 0xcf, 0xce, 0x76, 0x24, 0x71],
    [0x3c, 0xda, 0xf2, 0x49, 0x53, 0x3e, 0x53, 0x56, 0x8d, 0x25, 0xae, 0x33, 0xd4, 0x77, 0xb7, 0x23, 0xfc, 0xaa, 0x86, 0xf6, 0x4f, 0x1a, 0x55, 0xee, 0xb6, 0x1d, 0x07, 0x24, 0xaf, 0x32, 0x64, 0x5d],
    [0xed, 0xbc, 0xf3, 0xff, 0xa0, 0x34, 0x10, 0xd8, 0xfb, 0xc1, 0x67, 0x65, 0xd9, 0x4a, 0xac, 0x03, 0xf0, 0xfd, 0x7c, 0x05, 0x40, 0xf8, 0xdc, 0x09, 0x11, 0x05, 0x0c, 0x4d, 0x6d, 0xf4, 0x8e, 0x6e],
    [0xef, 0xfa, 0x32, 0xc4, 0xce, 0x47, 0xed, 0xb1, 0x2f, 0xc0, 0xc4, 0x67, 0xaa, 0xa0, 0xe4, 0x51, 0xcf, 0x8e, 0xb4, 0x23, 0x72, 0x37, 0x92, 0x95, 0x59, 0xc2, 0xde, 0x13, 0x91, 0x9a, 0x76, 0x31],
    [0x14, 0xed, 0xa4, 0x0c, 0xb8, 0xce, 0xaa, 0xa8, 0xe9, 0x67, 0x65, 0x92, 0x6c, 0x01, 0x64, 0x73, 0x18, 0x8c, 0xdf, 0x5d, 0x52, 0x5a, 0xc9, 0xf4, 0x20, 0xa6, 0x89, 0xad, 0x33, 0x08, 0xef, 0x72],
    [0x7a, 0x67, 0x35, 0x20, 0x69, 0x86, 0x1e, 0xf1, 0xa1, 0x18, 0xbd, 0x48, 0xa8, 0xb2, 0xa4, 0x43, 0xf4, 0xf1, 0xb0, 0x8d, 0xc1, 0x79, 0x2d, 0x6d, 0xb3, 0x4d, 0x56, 0x53, 0x15, 0x91, 0x23, 0x16],
    [0xaf, 0xe5, 0xb3, 0xb1, 0xaa, 0x00, 0x1e, 0x30, 0xff, 0x47, 0xbd, 0x42, 0x76, 0x31, 0x51, 0xcd, 0x2e, 0xeb, 0x2f, 0xc0, 0x00, 0xf8, 0xc1, 0xab, 0x7b, 0x02, 0xe9, 0xa9, 0x9d, 0x2e, 0x4e, 0x1b],
    [0xce, 0x42, 0x9a, 0x69, 0xce, 0x1a, 0xae, 0xa9, 0x4e, 0xe1, 0x50, 0xb4, 0xf7, 0x4c, 0x3a, 0xde, 0xf5, 0x30, 0xbb, 0x58, 0x8e, 0x0b, 0x9a, 0x73, 0x68, 0xaa, 0xa3, 0xeb, 0x58, 0x14, 0xb1, 0x50],
    [0x7b, 0x8c, 0xcc, 0xbd, 0x8b, 0x02, 0xbe, 0x3c, 0x11, 0xc1, 0x1d, 0x49, 0xe1, 0xe0, 0x94, 0x33, 0xe5, 0xcb, 0xb1, 0xd9, 0xb0, 0xa3, 0x8b, 0x05, 0xd3, 0xa6, 0xa5, 0xa0, 0x0c, 0xf1, 0x5a, 0x42],
    [0x87, 0xaa, 0x33, 0xdd, 0x16, 0x81, 0x7a, 0x73, 0x72, 0x19, 0xc6, 0xb5, 0xf2, 0x0e, 0x39, 0x37, 0x32, 0xd6, 0xfd, 0xe9, 0x36, 0xc2, 0xc0, 0x34, 0xe5, 0xf8, 0x29, 0x8b, 0x58, 0x8b, 0x64, 0x02],
    [0x50, 0x7c, 0x31, 0x58, 0xaf, 0xdd, 0x33, 0x56, 0x1c, 0x58, 0x39, 0xbc, 0xb7, 0x03, 0x2d, 0x37, 0x45, 0x19, 0x27, 0xed, 0x83, 0x1b, 0x68, 0x10, 0x0c, 0x98, 0x65, 0x86, 0x25, 0x4a, 0xc1, 0x55],
    [0xc5, 0xc5, 0x53, 0xb7, 0xe5, 0x5f, 0x37, 0xe5, 0x70, 0xbe, 0xda, 0x9a, 0xac, 0x41, 0x4c, 0x3c, 0x2b, 0xa7, 0x21, 0x55, 0xc5, 0x02, 0x50, 0x4f, 0xef, 0xbb, 0x4e, 0x33, 0x2b, 0x1b, 0xc2, 0x2e],
    [0x6d, 0xb9, 0x7a, 0x9f, 0x7d, 0x71, 0xf1, 0x49, 0x72, 0x3e, 0xbf, 0x2a, 0x1a, 0xd8, 0x5e, 0xcb, 0x88, 0x7d, 0x78, 0x72, 0x94, 0x0f, 0xc3, 0x97, 0x31, 0xf7, 0x75, 0xc6, 0x2b, 0xd9, 0x7d, 0x63],
    [0x44, 0xca, 0x84, 0x61, 0xe8, 0x37, 0x1e, 0x5d, 0xb7, 0x30, 0xd4, 0x6e, 0xea, 0xa6, 0x27, 0xd4, 0x76, 0x5c, 0x2d, 0xf7, 0x67, 0x4e, 0xd9, 0x61, 0xb1, 0xbf, 0x27, 0x97, 0xcc, 0xc9, 0xd8, 0x22],
    [0x34, 0xe4, 0x66, 0x8a, 0xff, 0x28, 0xca, 0x88, 0x22, 0x4f, 0x81, 0x31, 0x5f, 0xf1, 0xfd, 0x13, 0xe1, 0x60, 0xaf, 0xbf, 0x61, 0xbd, 0x79, 0x16, 0xdc, 0xdf, 0x4c, 0x5e, 0x69, 0x90, 0x5d, 0x1c],
    [0x01, 0x71, 0x5e, 0xb7, 0xa6, 0x90, 0xd1, 0xcc, 0x0b, 0xc9, 0x21, 0xf4, 0xca, 0x73, 0x89, 0xb4, 0x1f, 0xef, 0xe2, 0xd4, 0x3b, 0x35, 0x3f, 0xdc, 0x77, 0x53, 0x89, 0x38, 0xc1, 0x5c, 0xf1, 0x7b],
    [0xba, 0xce, 0xb7, 0xed, 0x19, 0xec, 0x52, 0xd8, 0xef, 0xd4, 0x5c, 0xaa, 0x47, 0xf8, 0x20, 0xb2, 0xc2, 0x56, 0xde, 0x2c, 0xc2, 0x4f, 0xcb, 0xb3, 0x9b, 0x57, 0x29, 0x0b, 0x3c, 0x68, 0x85, 0x5f],
    [0x35, 0x40, 0x70, 0x3f, 0xc2, 0xd0, 0x7a, 0x6b, 0x54, 0x80, 0xa1, 0x95, 0x3f, 0x89, 0x47, 0x42, 0x32, 0x65, 0x26, 0x7c, 0xc4, 0x92, 0xeb, 0x3d, 0x24, 0x27, 0x26, 0x01, 0x1e, 0x67, 0x9c, 0x77],
    [0xc0, 0x9c, 0xe1, 0xf2, 0x1e, 0x48, 0xe2, 0xf8, 0xa6, 0x9f, 0x01, 0x11, 0xf5, 0x81, 0x6c, 0xfa, 0x61, 0xdc, 0xac, 0xd6, 0x28, 0x38, 0x7a, 0x17, 0xca, 0x71, 0x1e, 0x7f, 0x6c, 0x78, 0xa2, 0x09],
    [0x8d, 0x84, 0x90, 0xcc, 0xf3, 0xf9, 0x45, 0x0d, 0xa6, 0x46, 0x52, 0xcf, 0x4d, 0xf6, 0xe3, 0xc0, 0x68, 0xc7, 0x2b, 0xb2, 0x7c, 0x8d, 0xd1, 0x50, 0xbc, 0x9c, 0xae, 0x60, 0xc4, 0x1c, 0xfb, 0x2b],
    [0x80, 0x45, 0xc1, 0x84, 0xc6, 0x24, 0x9e, 0x49, 0x77, 0xeb, 0x2e, 0x34, 0x39, 0x44, 0x44, 0xe5, 0x18, 0x14, 0x3f, 0x43, 0x77, 0x6c, 0x36, 0xca, 0x86, 0xb4, 0xbb, 0x05, 0x31, 0xb2, 0x45, 0x5d],
    [0xf8, 0xf6, 0x75, 0x5d, 0x8d, 0x29, 0xfd, 0xe4, 0x30, 0x4f, 0xd0, 0xe6, 0x8a, 0xc9, 0x93, 0xb6, 0xea, 0xd3, 0x38, 0xb8, 0x52, 0x96, 0xb4, 0x3c, 0x4d, 0xe2, 0xf4, 0x0f, 0x19, 0x5d, 0x86, 0x19],
    [0x84, 0x9c, 0xa9, 0x57, 0x40, 0x08, 0xb7, 0x8b, 0x24, 0xad, 0xc7, 0x6f, 0x6e, 0x06, 0xed, 0xd0, 0x1f, 0x6e, 0xd4, 0x85, 0x3a, 0xef, 0x02, 0x33, 0xc8, 0xdf, 0x99, 0x82, 0x06, 0xcd, 0xe2, 0x2b],
    [0x2b, 0x05, 0x66, 0xd6, 0xa6, 0x57, 0xaf, 0x27, 0x6f, 0xa3, 0x35, 0x32, 0x09, 0x74, 0x98, 0x5c, 0x6c, 0x15, 0xf5, 0xa3, 0xf8, 0x3e, 0x11, 0xe0, 0xc1, 0xfa, 0xd1, 0xa5, 0x2e, 0x46, 0x69, 0x3b],
    [0x7b, 0xe4, 0x3e, 0x04, 0x50, 0x45, 0x21, 0x81, 0xea, 0x34, 0xd3, 0x26, 0xa1, 0xb0, 0xaf, 0x03, 0x0e, 0xd5, 0x42, 0x1e, 0xac, 0x6f, 0x7b, 0x24, 0x62, 0x5d, 0xd6, 0x9d, 0xc8, 0x2a, 0x9e, 0x7f],
    [0x27, 0x98, 0xc9, 0xdb, 0x7d, 0xf5, 0x41, 0x3c, 0x30, 0xbf, 0xbe, 0xe1, 0x57, 0x06, 0x38, 0x6f, 0xe7, 0x8c, 0x9b, 0xd6, 0x40, 0x4d, 0x7e, 0x7e, 0x79, 0x8b, 0x53, 0x8c, 0x10, 0x33, 0x5c, 0x4d],
    [0x2d, 0x43, 0x89, 0x9e, 0x0d, 0x26, 0x71, 0x41, 0xe9, 0x42, 0xd2, 0xa9, 0xa6, 0x59, 0x8c, 0x5d, 0x0b, 0xbc, 0x6e, 0x4c, 0x3e, 0x67, 0xb3, 0xac, 0xd9, 0x29, 0x07, 0x7c, 0x0a, 0x98, 0x0e, 0x22],
    [0xea, 0xce, 0x87, 0x22, 0xb2, 0xa9, 0xcd, 0x07, 0x1a, 0x0c, 0xef, 0x54, 0xd3, 0x06, 0xbb, 0xf2, 0xf5, 0xef, 0xa3, 0x5d, 0x15, 0x10, 0x8c, 0xe4, 0x10, 0x34, 0xf7, 0xf4, 0xe3, 0x6c, 0xd9, 0x49],
    [0x9c, 0xfa, 0x9e, 0x35, 0x6d, 0x73, 0xab, 0x5a, 0x52, 0x81, 0x0e, 0x7d, 0xed, 0x79, 0x6f, 0xd6, 0x94, 0xfa, 0x44, 0x0f, 0xe0, 0x73, 0x57, 0x71, 0xf5, 0x4b, 0xa3, 0x0f, 0xcf, 0x80, 0xbc, 0x7a],
    [0x46, 0xa2, 0x30, 0x84, 0x6b, 0xe0, 0x15, 0xfe, 0xa5, 0x8f, 0x3a, 0x97, 0xc3, 0xf7, 0x62, 0xe9, 0x1a, 0xba, 0x37, 0x86, 0xdf, 0x5c, 0xdf, 0x6d, 0x91, 0xcd, 0xfe, 0xfc, 0x96, 0xd7, 0x00, 0x3d],
    [0xbe, 0x65, 0xd2, 0x79, 0x94, 0xe8, 0x92, 0x27, 0xb1, 0x62, 0x3c, 0xa0, 0x7d, 0xe5, 0x7e, 0x3d, 0x2b, 0xc2, 0x47, 0xe0, 0x6c, 0xf4, 0x1b, 0xfe, 0x23, 0x71, 0xdb, 0x20, 0x05, 0xc9, 0xae, 0x31],
    [0xdb, 0xb9, 0x06, 0xc5, 0xc9, 0x8e, 0x4a, 0x46, 0x6c, 0x09, 0xe8, 0x21, 0xa7, 0xb4, 0xad, 0x86, 0xe4, 0x0e, 0x84, 0xe1, 0x45, 0xbf, 0x2e, 0xd3, 0x5e, 0x61, 0x84, 0xc2, 0xc7, 0x12, 0xff, 0x69],
    [0x5c, 0x8d, 0xf1, 0xc7, 0x52, 0xdb, 0xc1, 0x59, 0x6a, 0xd2, 0xe3, 0xdb, 0x2b, 0x97, 0x39, 0xec, 0x41, 0x2a, 0x62, 0x0b, 0xe4, 0x35, 0xea, 0x99, 0xe4, 0xbe, 0x81, 0x15, 0x73, 0xd2, 0x86, 0x23],
    [0xac, 0xd1, 0x01, 0x6b, 0x58, 0x8d, 0x4e, 0xaa, 0x24, 0x53, 0xbb, 0x10, 0xda, 0xda, 0xb0, 0xf4, 0x7b, 0x8f, 0x3e, 0xe9, 0x64, 0x30, 0xc3, 0x58, 0x3b, 0xaf, 0x31, 0x2d, 0x31, 0x04, 0x15, 0x15],
    [0xf7, 0xb2, 0x70, 0x3b, 0xb9, 0x1e, 0x6d, 0x85, 0xd8, 0x82, 0xa3, 0xb9, 0x9e, 0x06, 0x97, 0xb5, 0x9e, 0xec, 0xb8, 0x1b, 0x84, 0x7e, 0x19, 0x10, 0xb2, 0x00, 0x5b, 0xdc, 0xf8, 0x58, 0x4f, 0x72],
    [0x44, 0x58, 0x0f, 0x5a, 0x3c, 0x44, 0xb3, 0xdc, 0x54, 0x35, 0x20, 0x89, 0x06, 0xc6, 0x74, 0x06, 0x96, 0xcc, 0x25, 0xd6, 0xcf, 0xd5, 0xf8, 0x13, 0x7c, 0x37, 0x9f, 0x12, 0xfc, 0x53, 0xf4, 0x45],
    [0x27, 0x00, 0x39, 0x41, 0x4d, 0xcf, 0xd3, 0xa5, 0x77, 0xd1, 0x81, 0x61, 0x1a, 0x29, 0x93, 0xf3, 0xea, 0x07, 0x2f, 0xb5, 0x0e, 0xd0, 0xe4, 0xfc, 0x2c, 0x36, 0xc4, 0x4a, 0xb5, 0x9b, 0x14, 0x72],
    [0x9b, 0x41, 0xf0, 0x6b, 0x99, 0x6e, 0xd7, 0x83, 0xfe, 0x54, 0x21, 0x35, 0xab, 0x45, 0xfc, 0xfe, 0xe2, 0x0c, 0xce, 0x96, 0x0f, 0x82, 0xed, 0x10, 0x76, 0x11, 0x36, 0x6b, 0x89, 0x9f, 0xc2, 0x6f],
    [0x62, 0x67, 0xff, 0xa5, 0xc2, 0x1c, 0x94, 0x4d, 0x65, 0x79, 0x8b, 0x01, 0x03, 0xd5, 0x50, 0x04, 0x26, 0x22, 0xee, 0x8e, 0x34, 0x95, 0xed, 0xce, 0x98, 0x25, 0xb8, 0xf1, 0x81, 0xcb, 0xb8, 0x34],
    [0xbb, 0xe9, 0x69, 0x3d, 0x68, 0xa6, 0xa8, 0x62, 0xbd, 0x4f, 0x99, 0x3c, 0x3d, 0xdd, 0xef, 0x14, 0x0d, 0xe9, 0xb4, 0xc5, 0xb4, 0x63, 0x0f, 0x98, 0x9a, 0x11, 0x8f, 0x25, 0x81, 0xc5, 0xb8, 0x00],
    [0xbd, 0x0f, 0x9c, 0x82, 0x19, 0x5a, 0x25, 0x55, 0x4e, 0x9d, 0xe9, 0x68, 0x2a, 0xae, 0x39, 0xc9, 0x0d, 0xb5, 0x33, 0x2b, 0x86, 0x85, 0x45, 0x0d, 0x01, 0xa5, 0x79, 0x54, 0xf9, 0xf2, 0x00, 0x32],
    [0x6f, 0xf5, 0x61, 0xcc, 0x90, 0x74, 0xbb, 0x8d, 0xf3, 0xee, 0xd9, 0xa1, 0x37, 0xf2, 0xcc, 0xf5, 0x06, 0x10, 0xd8, 0x3f, 0x58, 0x2e, 0x8d, 0xeb, 0xf9, 0x0e, 0x4b, 0x97, 0x44, 0xea, 0x04, 0x2d],
    [0xe1, 0xb1, 0xc0, 0xfe, 0xd0, 0x10, 0x60, 0x4f, 0x1e, 0xd1, 0x4b, 0x28, 0x21, 0xc2, 0x19, 0x5f, 0x5f, 0xca, 0xa3, 0xba, 0xb8, 0x29, 0x10, 0x06, 0x09, 0xcd, 0x56, 0x22, 0xee, 0x0a, 0x3f, 0x73],
    [0xca, 0x9a, 0x47, 0x42, 0x88, 0x5c, 0xe6, 0x8d, 0x78, 0xfc, 0x12, 0x1f, 0xb1, 0x92, 0x86, 0x34, 0x69, 0xa5, 0x7f, 0x94, 0x5b, 0x9e, 0x91, 0x5b, 0x37, 0x53, 0xd0, 0xa7, 0xfd, 0x3a, 0x31, 0x7d],
    [0xa0, 0x1e, 0x47, 0xb6, 0xb9, 0x7a, 0xb3, 0xfd, 0x20, 0x08, 0x9e, 0x97, 0xbd, 0xe3, 0x45, 0xec, 0xcb, 0xc0, 0xee, 0x99, 0x2e, 0xd6, 0x85, 0x66, 0x4c, 0x5b, 0xac, 0x30, 0x13, 0xdf, 0xfa, 0x0c],
    [0x9f, 0xd5, 0xca, 0x43, 0xe6, 0xb2, 0x90, 0xae, 0x8e, 0x1c, 0x4b, 0x22, 0xa9, 0x57, 0x17, 0xcf, 0xf8, 0xa5, 0x82, 0xfb, 0xbe, 0x53, 0x34, 0xef, 0x89, 0xec, 0xb6, 0x17, 0xbc, 0x5d, 0xf9, 0x38],
    [0x9c, 0xea, 0x42, 0xd9, 0xc8, 0x2d, 0x49, 0x8d, 0xc7, 0x24, 0x3d, 0x62, 0xe1, 0xfc, 0x57, 0x70, 0x79, 0x2e, 0x6c, 0xdb, 0xad, 0xf6, 0x97, 0x09, 0xad, 0x70, 0x2f, 0x70, 0x8a, 0xa7, 0x11, 0x46],
    [0xee, 0x39, 0x37, 0xf1, 0x4e, 0xff, 0xa0, 0x4b, 0x1c, 0x46, 0xfb, 0xbc, 0xa0, 0x11, 0x34, 0x3f, 0x60, 0x40, 0x47, 0xc6, 0x55, 0xe2, 0x9c, 0xab, 0x5e, 0x5c, 0x90, 0x0c, 0x14, 0xa2, 0xc2, 0x2d],
    [0xbf, 0x5c, 0x22, 0xad, 0x7f, 0x3b, 0x97, 0x05, 0x6b, 0xd5, 0x7c, 0x07, 0xa3, 0xa1, 0x86, 0x08, 0x10, 0xf9, 0xbb, 0x9b, 0xe5, 0x4b, 0x56, 0xd1, 0x09, 0xdb, 0xb6, 0x63, 0x19, 0x11, 0xf6, 0x4f],
    [0xa0, 0x89, 0x88, 0x25, 0x28, 0x77, 0x10, 0x4f, 0xf2, 0xec, 0x4c, 0x79, 0xe6, 0x41, 0xac, 0x4c, 0x16, 0x93, 0x5b, 0x4f, 0xf4, 0xcf, 0x78, 0x98, 0xe8, 0x89, 0xeb, 0x78, 0x9a, 0x81, 0x31, 0x37],
    [0x78, 0xfa, 0xfc, 0x9d, 0xcc, 0xb3, 0xf6, 0x8b, 0x3c, 0x70, 0xaa, 0x1d, 0xcf, 0xb8, 0x88, 0x83, 0xbf, 0x92, 0x11, 0x78, 0xbe, 0xb5, 0x41, 0x0d, 0xb1, 0x6c, 0x0a, 0x6c, 0x38, 0x89, 0x0d, 0x0f],
    [0x07, 0x69, 0x45, 0xe9, 0x28, 0xad, 0xf7, 0x23, 0x03, 0xfb, 0x25, 0xf0, 0x26, 0xc0, 0x43, 0xef, 0x6d, 0xdb, 0x7d, 0x45, 0x58, 0xc0, 0xfd, 0x2b, 0x7a, 0x8a, 0xd6, 0x5c, 0x8e, 0xba, 0x2c, 0x31],
    [0x43, 0x65, 0x26, 0x75, 0x3a, 0x0d, 0xbc, 0x62, 0xed, 0x70, 0x80, 0x51, 0xea, 0x12, 0x18, 0x95, 0x41, 0xb9, 0x2c, 0xf2, 0x79, 0x8f, 0x8d, 0x59, 0x00, 0x90, 0x79, 0xdc, 0x02, 0xb3, 0x42, 0x6c],
    [0x2a, 0x02, 0x86, 0x2d, 0x56, 0xe6, 0xaf, 0xc2, 0xd1, 0x79, 0xc3, 0xd4, 0x0e, 0x33, 0x69, 0xba, 0x1a, 0x90, 0xd9, 0xd6, 0xab, 0x17, 0x76, 0xaa, 0x1b, 0xbf, 0x73, 0xdd, 0x7f, 0x45, 0xf6, 0x5d],
    [0xb0, 0xef, 0xa5, 0x6a, 0xc4, 0x0c, 0xce, 0xea, 0xa2, 0xc7, 0x0e, 0x04, 0x6d, 0x09, 0xf0, 0x57, 0x5c, 0xa9, 0x42, 0xb2, 0xa0, 0x49, 0xea, 0xa1, 0xaa, 0x37, 0x66, 0x2f, 0x03, 0x1e, 0x75, 0x37],
    [0x74, 0xb4, 0x1c, 0xb8, 0x0b, 0x0c, 0xc4, 0x95, 0x1d, 0xbb, 0x66, 0x1d, 0xbf, 0x19, 0xd9, 0xa1, 0x7a, 0x6b, 0x40, 0x91, 0x13, 0xb3, 0x4a, 0xc9, 0x00, 0x3f, 0xcf, 0x17, 0x2d, 0x53, 0x5f, 0x25],
    [0x75, 0xa4, 0x15, 0x97, 0x42, 0x8f, 0x15, 0x7c, 0x0b, 0xfc, 0xe1, 0x3b, 0x20, 0x65, 0x8d, 0x0c, 0xb7, 0xf4, 0x10, 0x0f, 0xf0, 0x76, 0xe9, 0xc7, 0xbd, 0x47, 0x4f, 0xd9, 0x49, 0x58, 0x1b, 0x79],
    [0xfc, 0x5d, 0x91, 0xc0, 0xbc, 0x78, 0x02, 0xe1, 0xec, 0x09, 0x95, 0xa5, 0xd2, 0xa2, 0x0e, 0x37, 0x78, 0x93, 0x25, 0x59, 0x83, 0x5d, 0x8f, 0xdf, 0xa3, 0x18, 0x0c, 0x67, 0x66, 0xa7, 0x63, 0x7e],
    [0x3b, 0xf3, 0x1f, 0x91, 0x66, 0x67, 0x37, 0xa5, 0x04, 0xac, 0x7b, 0x39, 0xa2, 0xa2, 0x99, 0xc3, 0x2b, 0xee, 0xe1, 0xae, 0xd3, 0xa3, 0xb3, 0x67, 0x98, 0x43, 0x68, 0x1b, 0xc8, 0x70, 0xa9, 0x15],
    [0xdf, 0xc3, 0x3e, 0x29, 0xbe, 0x93, 0xae, 0x90, 0xc1, 0x8d, 0x91, 0x4d, 0x1a, 0x73, 0xcc, 0x3a, 0xcd, 0x7f, 0xb0, 0x81, 0x27, 0xeb, 0xd0, 0xeb, 0x6d, 0xfe, 0x79, 0x98, 0xa1, 0x4d, 0x97, 0x15],
    [0x5d, 0x33, 0xc5, 0xb5, 0xfc, 0xf9, 0x48, 0x9d, 0xa7, 0x7c, 0x0b, 0x93, 0xb6, 0xd6, 0x4c, 0x79, 0x1d, 0x66, 0xf7, 0x6d, 0x60, 0xa0, 0xe8, 0xfd, 0x90, 0xfe, 0x69, 0xde, 0xf8, 0x6f, 0x21, 0x11],
    [0x42, 0x82, 0x42, 0x87, 0xaf, 0x3f, 0x77, 0x6c, 0x76, 0xee, 0x8e, 0x7c, 0xee, 0xf8, 0x5c, 0x64, 0x1d, 0x19, 0xdc, 0x37, 0x96, 0x2e, 0xf6, 0xca, 0x84, 0x6b, 0x60, 0xbe, 0x34, 0x11, 0x27, 0x66],
    [0x76, 0x44, 0xef, 0x0c, 0x5f, 0x4e, 0x01, 0x42, 0x83, 0xb0, 0xa5, 0xcd, 0x14, 0xea, 0x58, 0x79, 0x76, 0x89, 0x83, 0xaa, 0x6e, 0x3f, 0x06, 0x8d, 0xb6, 0x9a, 0x79, 0xff, 0x01, 0x9b, 0x5e, 0x3c],
    [0x19, 0xd0, 0x41, 0xd9, 0x15, 0x76, 0x93, 0x05, 0x7a, 0x1a, 0x4b, 0x83, 0x15, 0x76, 0xdf, 0x94, 0x03, 0xd9, 0x4f, 0xb0, 0xc3, 0xce, 0xfb, 0x65, 0xf4, 0xe1, 0x73, 0x63, 0x11, 0x28, 0x5a, 0x71],
    [0x3b, 0x97, 0x92, 0x4c, 0xfd, 0x01, 0x9f, 0x17, 0xe1, 0xc0, 0xeb, 0xed, 0x75, 0x34, 0xc7, 0xbf, 0x3b, 0x62, 0xe4, 0x65, 0x21, 0x6c, 0x9d, 0xd4, 0x03, 0xfe, 0xd1, 0xb7, 0xbe, 0x29, 0x9a, 0x58],
    [0x6d, 0xe7, 0x09, 0x02, 0xf9, 0xab, 0x4b, 0xab, 0x3a, 0x6d, 0x3c, 0x18, 0x23, 0xb5, 0x15, 0x99, 0xe5, 0xd9, 0x2d, 0xd7, 0x1d, 0x6f, 0x2f, 0x8a, 0xf1, 0x54, 0xda, 0xa3, 0xc9, 0x96, 0x27, 0x4f],
    [0xff, 0x16, 0xd2, 0xbe, 0xe4, 0x94, 0x88, 0x6f, 0xd2, 0x3a, 0x97, 0x9b, 0xd8, 0x6e, 0x95, 0x90, 0xe3, 0x65, 0x3e, 0x28, 0x36, 0x25, 0xea, 0x05, 0x96, 0xc9, 0xa0, 0x7d, 0x56, 0xb8, 0xac, 0x5f],
    [0x2e, 0xa3, 0xfd, 0x83, 0x64, 0x6c, 0xc3, 0xc0, 0x95, 0xd9, 0x22, 0x92, 0x88, 0xcf, 0x7d, 0x72, 0x34, 0x31, 0xef, 0xfb, 0xb1, 0x18, 0xc1, 0x2f, 0x40, 0x02, 0x5e, 0x72, 0x52, 0x20, 0x8e, 0x58],
    [0xbb, 0xc4, 0x8e, 0xb3, 0xf1, 0xbb, 0x09, 0x1d, 0xed, 0x5b, 0xea, 0xa7, 0xcc, 0x34, 0x54, 0x7c, 0x94, 0x7c, 0xfa, 0x19, 0x20, 0xb7, 0x0e, 0xeb, 0x4c, 0x41, 0xf8, 0xf7, 0x87, 0x80, 0xa7, 0x69],
    [0x66, 0x4f, 0x4a, 0x6a, 0x9d, 0x7c, 0xe3, 0x0a, 0x48, 0x07, 0xbf, 0xf5, 0x77, 0x25, 0xb2, 0x3e, 0x94, 0x79, 0x75, 0xdf, 0x16, 0x98, 0x3a, 0x76, 0x7e, 0x23, 0x9d, 0x4c, 0x2a, 0xb3, 0xc6, 0x47],
    [0x1d, 0xe2, 0x44, 0x99, 0x47, 0x79, 0x0a, 0x52, 0x5b, 0xd9, 0x6b, 0xa7, 0x4c, 0x48, 0xd5, 0x52, 0x66, 0xc0, 0xfd, 0xb5, 0x3c, 0x3a, 0xe6, 0x39, 0x49, 0xac, 0x8a, 0x44, 0xbf, 0x5f, 0x28, 0x4d],
    [0x57, 0x17, 0xb8, 0x30, 0xfc, 0x19, 0x2b, 0x43, 0x48, 0x80, 0x32, 0x34, 0x3f, 0x8e, 0xc3, 0x34, 0x83, 0x44, 0x51, 0x5d, 0x25, 0xa6, 0xff, 0x2a, 0x05, 0x26, 0xa9, 0xf5, 0x55, 0x6c, 0x67, 0x37],
    [0x35, 0x05, 0xa5, 0x6b, 0x39, 0x7b, 0x9b, 0x2d, 0xd0, 0xc7, 0x14, 0xa7, 0xc6, 0x2b, 0xe3, 0x12, 0x0d, 0xa9, 0x7e, 0xfe, 0xf2, 0x78, 0x53, 0x9c, 0x39, 0xb8, 0xae, 0x28, 0x69, 0xf2, 0x4a, 0x4d],
    [0x60, 0x03, 0xf3, 0x64, 0x8c, 0x22, 0x4d, 0x12, 0x3c, 0xe5, 0x6b, 0xf2, 0xcd, 0x4e, 0xa5, 0x68, 0x38, 0xf7, 0x14, 0x5d, 0x22, 0x85, 0x4c, 0xf8, 0x7a, 0xef, 0x7b, 0xc5, 0xe6, 0x09, 0x7f, 0x1d],
    [0x60, 0x38, 0x31, 0xc7, 0xa7, 0xe0, 0xad, 0x61, 0xe7, 0xae, 0x94, 0xfa, 0xc3, 0x0a, 0xc4, 0xdc, 0xdf, 0x53, 0xdc, 0x18, 0x8f, 0xcc, 0x82, 0x1d, 0xed, 0x74, 0xd8, 0x5b, 0xe8, 0xcb, 0x1d, 0x7f],
    [0x79, 0xcc, 0x91, 0xe0, 0x4e, 0x6e, 0xa9, 0xbc, 0xfe, 0x3f, 0x0d, 0x55, 0x06, 0x39, 0x11, 0x4f, 0xd2, 0xbe, 0xe1, 0x2f, 0xad, 0x8d, 0x73, 0x83, 0x60, 0xc0, 0x07, 0xc6, 0xa5, 0x9f, 0xac, 0x63],
    [0xae, 0x68, 0xcb, 0x34, 0xac, 0xb1, 0x9d, 0x28, 0x88, 0x25, 0x35, 0xaa, 0xf0, 0x6d, 0x3f, 0xf9, 0xcc, 0xb1, 0x64, 0xce, 0xdd, 0x3f, 0x6b, 0xa4, 0x2a, 0x81, 0x79, 0xc5, 0x88, 0x3c, 0xa9, 0x50],
    [0x9c, 0x88, 0xbf, 0xb6, 0x8f, 0xa0, 0x9c, 0xb9, 0x70, 0x9d, 0x8a, 0x49, 0x94, 0xea, 0xc0, 0x9b, 0x48, 0x36, 0x72, 0x93, 0x97, 0xd9, 0x97, 0x39, 0xe6, 0x36, 0xb1, 0x98, 0x46, 0xbf, 0x27, 0x61],
    [0x70, 0xee, 0x08, 0x46, 0xb6, 0x4b, 0x11, 0xe0, 0xe8, 0xff, 0x52, 0xc6, 0x80, 0x44, 0x66, 0xe0, 0x7a, 0x69, 0x05, 0xe5, 0x9b, 0xf1, 0x2d, 0x09, 0x31, 0x5d, 0x4a, 0xed, 0xae, 0xf6, 0x89, 0x28],
    [0x31, 0x52, 0x8b, 0x83, 0x2b, 0xe5, 0x89, 0x2b, 0x3a, 0xeb, 0x46, 0xb4, 0xfa, 0xb9, 0x24, 0x04, 0x10, 0x7c, 0xa1, 0xf6, 0xe3, 0x4c, 0xcb, 0x31, 0xc5, 0xa4, 0x14, 0x8e, 0xb3, 0xae, 0x3c, 0x66],
    [0x6c, 0x2d, 0x5b, 0x6b, 0xdb, 0x8d, 0x30, 0x04, 0x8a, 0x82, 0x46, 0x4f, 0xaf, 0x15, 0xc3, 0x68, 0x2f, 0x94, 0xa2, 0x10, 0x36, 0x55, 0x4a, 0xb8, 0x44, 0x8a, 0x99, 0xdc, 0xbf, 0x2e, 0x98, 0x60],
    [0x53, 0x5e, 0x44, 0xff, 0x28, 0x70, 0x43, 0x6c, 0x2d, 0xe9, 0xa4, 0x8b, 0x15, 0x5d, 0x34, 0x7f, 0x5c, 0xe9, 0xab, 0xcc, 0x4f, 0x25, 0xe5, 0x8d, 0x96, 0xf6, 0x39, 0xe6, 0x84, 0xfe, 0xf2, 0x06],
    [0xac, 0xbd, 0x70, 0x0c, 0x44, 0x90, 0xca, 0xc3, 0x82, 0xff, 0x71, 0x60, 0x70, 0xa4, 0x26, 0xc1, 0x07, 0x2a, 0x25, 0x8a, 0x06, 0x94, 0x3f, 0x47, 0x7d, 0x6b, 0x91, 0x9d, 0x51, 0xb5, 0x2b, 0x4b],
    [0x04, 0xea, 0x19, 0x28, 0xa6, 0xbe, 0x4b, 0x98, 0xb3, 0x8e, 0x9f, 0x74, 0x27, 0x13, 0x5f, 0x45, 0x1d, 0x78, 0xad, 0x57, 0x70, 0xff, 0x1e, 0xd8, 0x5b, 0xea, 0x3c, 0x0e, 0xb2, 0x04, 0x4e, 0x4f],
    [0x84, 0x75, 0x71, 0xba, 0x3a, 0xd6, 0x85, 0x4d, 0x1d, 0xd9, 0xc1, 0xc4, 0x0e, 0x34, 0xa9, 0xc5, 0xc1, 0x79, 0xf9, 0xf3, 0x5e, 0xb0, 0x90, 0x8e, 0xd8, 0x94, 0x71, 0xab, 0xf5, 0xe6, 0x9b, 0x7c],
    [0x3f, 0x65, 0x97, 0xcc, 0x05, 0x10, 0x19, 0x4d, 0x8b, 0xe7, 0xa5, 0xa9, 0x3b, 0xd5, 0x20, 0xfd, 0x9b, 0x1e, 0x4f, 0x37, 0x92, 0x03, 0x4b, 0x78, 0xcc, 0x76, 0x80, 0x52, 0xd9, 0x38, 0x9e, 0x61],
    [0xea, 0x09, 0x6b, 0x31, 0x76, 0x93, 0xf7, 0xb8, 0x5f, 0xf3, 0xa1, 0x83, 0xe3, 0x97, 0x42, 0xad, 0xe7, 0x4d, 0xb1, 0xcd, 0xba, 0x65, 0x77, 0xf0, 0x49, 0xe8, 0x79, 0x8e, 0xb2, 0xc7, 0x36, 0x02],
    [0x92, 0x53, 0x0b, 0x08, 0x15, 0x78, 0x5b, 0x1e, 0x2a, 0x23, 0xc3, 0x13, 0xa2, 0xf3, 0x7c, 0xa0, 0x79, 0xbb, 0xbd, 0xab, 0xe9, 0x5c, 0x6e, 0x1a, 0xdc, 0xb1, 0xd0, 0x9c, 0xe8, 0x97, 0x32, 0x01],
    [0xca, 0x38, 0x2b, 0x97, 0x76, 0x39, 0x31, 0x78, 0xb7, 0xcf, 0x20, 0x45, 0xdb, 0xbc, 0xdf, 0xcb, 0xf6, 0x99, 0x52, 0x33, 0xe2, 0xef, 0x36, 0xb8, 0x27, 0x92, 0x5f, 0xb4, 0x14, 0x34, 0x97, 0x23],
    [0xd6, 0xde, 0x4c, 0x3f, 0xb0, 0x58, 0x40, 0xe4, 0x38, 0xe6, 0x1b, 0x6f, 0xe5, 0x93, 0x35, 0x13, 0x88, 0x66, 0xcb, 0xbb, 0x44, 0x0a, 0x1b, 0xe3, 0xbe, 0x4f, 0x54, 0x19, 0x45, 0x2c, 0xf7, 0x1c],
    [0x6c, 0xfc, 0x06, 0xc6, 0x56, 0xe5, 0x92, 0xb9, 0xc3, 0x7b, 0x7a, 0x3a, 0xcb, 0xcf, 0x19, 0xa3, 0x75, 0xe4, 0x63, 0xda, 0x9b, 0x47, 0x9e, 0x38, 0xf3, 0x8a, 0x32, 0xc9, 0x91, 0x15, 0xdb, 0x38],
    [0x64, 0x2b, 0x68, 0xbb, 0x7f, 0xfc, 0x59, 0x30, 0xc4, 0x83, 0x66, 0xeb, 0xe3, 0x38, 0xea, 0x8c, 0xe5, 0xc4, 0x73, 0xf3, 0xa7, 0x20, 0xe9, 0x79, 0x32, 0x4e, 0x8d, 0xd0, 0xc0, 0xbe, 0x99, 0x6c],
    [0x58, 0xc8, 0x35, 0x2f, 0xf3, 0x09, 0xeb, 0x07, 0x4d, 0xce, 0x4a, 0xd0, 0xd3, 0xa0, 0x08, 0x5a, 0x9c, 0xc2, 0xe4, 0x1c, 0xf9, 0x77, 0x31, 0x33, 0xb1, 0xbd, 0x2d, 0x31, 0x51, 0x95, 0xe8, 0x6e],
    [0x67, 0xda, 0xa9, 0xd8, 0x32, 0xe7, 0x36, 0xed, 0x12, 0xf0, 0x5a, 0x61, 0xb2, 0x53, 0x04, 0x97, 0x87, 0x3c, 0xd9, 0xc6, 0x02, 0xbe, 0x77, 0x3b, 0x5d, 0xe3, 0x18, 0x3b, 0xcf, 0xa9, 0x35, 0x20],
    [0x19, 0xd3, 0x3a, 0x1e, 0xc9, 0x33, 0xca, 0xb3, 0xa4, 0x72, 0x0e, 0x0c, 0xf1, 0x4f, 0x0a, 0x14, 0x4c, 0x9f, 0x6e, 0xe2, 0x30, 0x00, 0x98, 0x5e, 0xff, 0x9b, 0x59, 0xdd, 0x52, 0x99, 0xfe, 0x46],
    [0x7a, 0x79, 0xe8, 0xf4, 0xf7, 0x4f, 0x5d, 0x1a, 0x28, 0x0f, 0x36, 0x81, 0x84, 0x8b, 0x28, 0x66, 0x5f, 0x1b, 0x76, 0xc4, 0x0d, 0x70, 0xbf, 0xca, 0x41, 0xed, 0xbd, 0x61, 0x8f, 0x89, 0x34, 0x30],
    [0xe8, 0xfd, 0xf6, 0x25, 0x47, 0x8b, 0x8d, 0x87, 0x07, 0x65, 0x49, 0x3f, 0xdb, 0xf2, 0x92, 0x7b, 0xf6, 0x29, 0xdc, 0x8d, 0xa8, 0x55, 0xe6, 0xc7, 0xc0, 0xa5, 0x51, 0x85, 0x21, 0xbc, 0x7d, 0x21],
    [0xa9, 0x8e, 0x71, 0x0f, 0xc4, 0xfd, 0x1a, 0xc8, 0x40, 0xf4, 0x9b, 0x7f, 0x20, 0xcc, 0x9d, 0x52, 0xa9, 0xf5, 0xa1, 0x5c, 0xa5, 0x79, 0x25, 0x10, 0x92, 0x20, 0xce, 0x05, 0x08, 0x98, 0x6d, 0x11],
    [0xe1, 0x95, 0x5d, 0x0d, 0x6a, 0x7e, 0x37, 0x80, 0x0d, 0x34, 0x3d, 0x5c, 0xae, 0x6b, 0x3e, 0xe1, 0x07, 0x41, 0xff, 0xfc, 0x12, 0x9c, 0xb9, 0x6c, 0x3f, 0x13, 0xbd, 0xbe, 0x53, 0x43, 0xc4, 0x0d],
    [0x29, 0x83, 0xec, 0x4e, 0x59, 0x9d, 0xc3, 0xe9, 0xc6, 0x44, 0xe8, 0x9a, 0x62, 0x1e, 0xaf, 0x0b, 0xca, 0x05, 0x0e, 0xf6, 0x2d, 0xa2, 0xc4, 0xce, 0x27, 0xdb, 0x41, 0x7c, 0x93, 0x01, 0x18, 0x32],
    [0x45, 0xe6, 0x18, 0x0e, 0x5a, 0x1e, 0x58, 0x79, 0x19, 0x5b, 0xad, 0xd1, 0x6a, 0x50, 0x15, 0xc2, 0xbb, 0x83, 0x41, 0xaf, 0xc4, 0xa7, 0xbc, 0xea, 0xc1, 0x80, 0x06, 0xd4, 0x3b, 0xca, 0x78, 0x6d],
    [0x05, 0xf5, 0x0f, 0xd2, 0x9a, 0x1d, 0xe6, 0x03, 0xa9, 0x72, 0x07, 0xf7, 0xa1, 0xc6, 0x2f, 0x19, 0x53, 0x7c, 0xef, 0xc5, 0x77, 0x93, 0x09, 0xec, 0x87, 0x6b, 0x5c, 0x3e, 0x3c, 0x72, 0x7f, 0x56],
    [0x51, 0x4c, 0xc8, 0x07, 0xbc, 0x2c, 0xdd, 0xe6, 0x27, 0xdb, 0xc1, 0x3b, 0x28, 0x43, 0xd5, 0x19, 0x4a, 0x7c, 0x7c, 0x6d, 0x49, 0x4d, 0x27, 0x42, 0x32, 0xda, 0x9a, 0x48, 0xae, 0xd5, 0x3f, 0x78],
    [0x99, 0xc4, 0x1e, 0x79, 0x64, 0x9e, 0x65, 0x7d, 0xdf, 0x26, 0x16, 0x45, 0x2a, 0x62, 0x66, 0xea, 0x7f, 0x81, 0xf4, 0xa7, 0x42, 0x3d, 0x00, 0xbf, 0x0a, 0x1b, 0x3c, 0x41, 0xe4, 0x8e, 0xce, 0x35],
    [0xf0, 0x1f, 0xdf, 0x77, 0xf9, 0xe3, 0x59, 0x8c, 0xba, 0xeb, 0x33, 0x19, 0x80, 0x6d, 0x5a, 0x6e, 0xa8, 0xe9, 0x8d, 0x97, 0xa7, 0x6b, 0x1d, 0x7a, 0x29, 0xbb, 0x7d, 0xf2, 0x1e, 0x55, 0x88, 0x5c],
    [0x26, 0x14, 0x28, 0xcf, 0x2f, 0xb8, 0x0b, 0xe7, 0x1c, 0xe7, 0x98, 0x58, 0xe9, 0x93, 0x6e, 0x6a, 0x7a, 0x34, 0x02, 0xdb, 0x30, 0x89, 0xf5, 0xfa, 0x27, 0x1a, 0x7c, 0xd4, 0x30, 0x17, 0x94, 0x34],
    [0x5f, 0x28, 0x33, 0x72, 0xa2, 0x42, 0x80, 0xe4, 0x4c, 0xcd, 0xa7, 0xe3, 0x02, 0x00, 0x16, 0x9d, 0x2b, 0x81, 0x0d, 0x20, 0xf1, 0x5a, 0x0c, 0x57, 0x47, 0xf5, 0xf8, 0x1f, 0x89, 0xb1, 0x1a, 0x45],
    [0x80, 0x53, 0x64, 0xdb, 0x1d, 0x33, 0x2d, 0xe2, 0xca, 0xcf, 0x7c, 0x53, 0x3f, 0x1c, 0xc0, 0xce, 0x6e, 0x2f, 0xce, 0x2d, 0xc0, 0xb3, 0xf0, 0x94, 0xc6, 0xf2, 0xaa, 0xba, 0xc5, 0xfc, 0x3e, 0x41],
    [0x86, 0x78, 0xb6, 0x52, 0xc6, 0x88, 0x65, 0x1d, 0x67, 0x14, 0x3c, 0x1e, 0x02, 0xf2, 0x8e, 0xd0, 0x5d, 0x04, 0xff, 0x57, 0x56, 0xae, 0x3b, 0xce, 0xa9, 0xca, 0x62, 0x54, 0x92, 0xec, 0xdf, 0x52],
    [0xc3, 0xb3, 0x06, 0x9b, 0x8f, 0x0d, 0xbf, 0x82, 0x26, 0xef, 0x4f, 0x26, 0xab, 0x5f, 0xa7, 0x90, 0xfc, 0x73, 0x0f, 0xf2, 0xdd, 0x8e, 0x9b, 0xc0, 0x5d, 0xe7, 0xd0, 0x91, 0x64, 0xef, 0x4b, 0x4c],
    [0xbc, 0xb9, 0x77, 0x46, 0x90, 0x1d, 0x04, 0x11, 0x91, 0x1d, 0xca, 0x72, 0x63, 0xbf, 0x67, 0x47, 0xc9, 0xf6, 0xc2, 0xe8, 0x34, 0x6e, 0xa2, 0xd5, 0xcb, 0x05, 0x81, 0x09, 0x91, 0x2f, 0xa0, 0x7f],
    [0x36, 0x40, 0x47, 0x4e, 0x1b, 0x8e, 0x1c, 0xa4, 0xb1, 0x99, 0xd5, 0x36, 0xd6, 0xca, 0x23, 0xf5, 0xdb, 0xed, 0x30, 0x98, 0x1f, 0x9e, 0xe5, 0xdc, 0x94, 0xd3, 0x65, 0xf7, 0xe3, 0x72, 0x58, 0x56],
    [0xde, 0xda, 0x4d, 0x86, 0x50, 0x00, 0x73, 0x4f, 0x7e, 0x10, 0x26, 0x8b, 0xec, 0xc1, 0x0c, 0x9a, 0xa2, 0x5b, 0xe3, 0x0c, 0xe8, 0x1a, 0x5d, 0x00, 0x43, 0x5f, 0x31, 0xaf, 0xf0, 0x86, 0x6d, 0x55],
    [0x67, 0x69, 0x5d, 0x1c, 0x33, 0xd3, 0xe4, 0x8e, 0x53, 0x0d, 0xc6, 0x32, 0xed, 0xf8, 0xea, 0xde, 0xab, 0x2f, 0xc1, 0xa0, 0x4e, 0x24, 0x06, 0x92, 0x99, 0xeb, 0xac, 0x8e, 0xb8, 0x2f, 0x0a, 0x53],
    [0x1f, 0xca, 0x06, 0x23, 0x6e, 0xd7, 0x27, 0xd1, 0xae, 0x6d, 0x97, 0x3b, 0x9b, 0x5f, 0xc1, 0x49, 0x46, 0x77, 0x7d, 0x14, 0x6e, 0x35, 0x79, 0x92, 0xfa, 0xcd, 0xc3, 0xec, 0xe3, 0xf2, 0xee, 0x35],
    [0x12, 0xd9, 0x07, 0xfa, 0x6d, 0x17, 0x86, 0x77, 0x37, 0xaa, 0x0c, 0x71, 0x68, 0xc6, 0x6d, 0x89, 0x35, 0x4a, 0x97, 0xbb, 0xc4, 0x90, 0x29, 0xad, 0x1e, 0xad, 0x4f, 0xed, 0x4b, 0x7b, 0x0d, 0x61],
    [0x40, 0xfd, 0x58, 0xf0, 0xde, 0x63, 0xd6, 0xa1, 0x8a, 0x61, 0x20, 0x04, 0x5e, 0xae, 0x6e, 0x8e, 0x50, 0x2b, 0x91, 0x2f, 0xa4, 0x9e, 0x83, 0xc4, 0x43, 0x2c, 0x00, 0xc5, 0x08, 0xdd, 0x94, 0x23],
    [0x02, 0x98, 0x38, 0xd8, 0x64, 0x31, 0x67, 0xab, 0x0b, 0x87, 0xaa, 0x4d, 0xb0, 0x5e, 0x3b, 0xbb, 0x57, 0x8d, 0xb2, 0x0f, 0x32, 0xae, 0xe5, 0x5a, 0xd7, 0xe6, 0x65, 0x53, 0xfc, 0xfa, 0x8a, 0x74],
    [0x23, 0x37, 0x08, 0x8d, 0x7c, 0x39, 0x92, 0xed, 0xb8, 0x6e, 0xce, 0xe8, 0xa2, 0xa0, 0x82, 0xde, 0x68, 0xca, 0xe2, 0x0a, 0x5c, 0xba, 0x3b, 0xcb, 0x63, 0x31, 0x5f, 0x52, 0xc4, 0x18, 0x3f, 0x7a],
    [0xc8, 0x41, 0x31, 0x2d, 0xa0, 0x93, 0x50, 0x71, 0xb6, 0x08, 0x6b, 0x25, 0xc0, 0xbe, 0x25, 0x77, 0x88, 0x63, 0xf3, 0x55, 0xa2, 0x99, 0x8e, 0x22, 0x51, 0x3d, 0x11, 0xc8, 0xdc, 0xbc, 0x7f, 0x54],
    [0x63, 0xbf, 0xc6, 0x55, 0x91, 0xff, 0x1b, 0xa4, 0xc6, 0xff, 0xe6, 0x1c, 0x8c, 0x20, 0xb1, 0x32, 0xc2, 0xf8, 0x73, 0xf2, 0x6a, 0xd0, 0xec, 0xb7, 0xa7, 0x44, 0x7a, 0x05, 0x5d, 0x63, 0x77, 0x4e],
    [0x52, 0x09, 0x74, 0x47, 0x2e, 0x85, 0x2b, 0x90, 0xdf, 0x0b, 0x04, 0xf7, 0x44, 0xf8, 0xe4, 0x73, 0x20, 0xdb, 0x26, 0x6e, 0x97, 0xed, 0xc8, 0xa1, 0x93, 0xf0, 0x60, 0x3b, 0x5f, 0xf6, 0x91, 0x33],
    [0xb5, 0x6c, 0x1b, 0xaf, 0xd9, 0x51, 0xa3, 0xb8, 0xee, 0x45, 0xd5, 0x59, 0x93, 0x99, 0x49, 0x49, 0xa4, 0x4a, 0x44, 0x9b, 0xfc, 0xd2, 0x86, 0x91, 0x39, 0x90, 0x9e, 0x49, 0x1c, 0x43, 0x31, 0x75],
    [0xf9, 0xc9, 0x25, 0x5c, 0xb5, 0xfe, 0x6e, 0x21, 0xd6, 0x95, 0xef, 0xbc, 0x43, 0x8c, 0x10, 0x53, 0xfb, 0x6f, 0x89, 0xb9, 0x2c, 0xe6, 0xc9, 0xc6, 0x54, 0x88, 0x60, 0xa2, 0xe6, 0x51, 0x45, 0x04],
    [0x9c, 0x19, 0xf2, 0xb6, 0x8e, 0x94, 0x36, 0xeb, 0x0c, 0xd5, 0xcf, 0x4d, 0x28, 0x08, 0xad, 0x34, 0x5d, 0xbb, 0x51, 0x3b, 0xeb, 0xd7, 0xb5, 0x8b, 0x18, 0x8d, 0x83, 0x1d, 0x54, 0xf8, 0x73, 0x61],
    [0x5f, 0x68, 0x7d, 0x4d, 0x3a, 0x64, 0xfe, 0x72, 0x97, 0x7a, 0x72, 0x90, 0xd4, 0x85, 0x79, 0xe5, 0xfd, 0x80, 0x9a, 0x1f, 0x94, 0x42, 0x1a, 0x3d, 0x50, 0x96, 0xe8, 0x0b, 0x8c, 0xd7, 0x46, 0x56],
    [0x09, 0x29, 0xbf, 0x61, 0x66, 0x42, 0x75, 0x93, 0xda, 0xc4, 0xd7, 0x61, 0xe6, 0x1f, 0x47, 0x6c, 0xdf, 0xc2, 0xa5, 0x68, 0x85, 0xe1, 0xf0, 0x3c, 0x3b, 0x10, 0xf8, 0xc4, 0xf0, 0xfa, 0xdc, 0x47],
    [0xa2, 0x55, 0x8f, 0x32, 0x2c, 0x80, 0x94, 0x63, 0x18, 0x95, 0xef, 0xb5, 0x0a, 0x69, 0xd9, 0x27, 0xdd, 0x65, 0x22, 0x6f, 0x07, 0xfe, 0x49, 0x8c, 0x38, 0x7d, 0xba, 0x46, 0x8b, 0xed, 0xa6, 0x71],
    [0x66, 0x8b, 0x83, 0xf8, 0x0c, 0x8b, 0x41, 0x84, 0x8f, 0x66, 0xcf, 0x67, 0x21, 0xec, 0xc1, 0x58, 0x51, 0xfd, 0xa9, 0x7e, 0xbe, 0x2a, 0x54, 0xcb, 0xa9, 0x9a, 0xf5, 0xb5, 0x48, 0xd9, 0x30, 0x66],
    [0x1f, 0xc7, 0x55, 0x22, 0xde, 0x10, 0x6c, 0x18, 0xf8, 0xdf, 0x00, 0xa0, 0xaa, 0x04, 0xcf, 0xb2, 0x60, 0xf0, 0x43, 0x06, 0x44, 0x82, 0x08, 0x9c, 0x73, 0x23, 0x71, 0x56, 0xfd, 0xc9, 0x3c, 0x6f],
    [0x63, 0xfd, 0x7a, 0x6a, 0xfd, 0x41, 0xad, 0x5b, 0x2e, 0x71, 0xdc, 0x67, 0x15, 0x95, 0x11, 0xfe, 0xb7, 0x4c, 0xe2, 0x13, 0x10, 0xb2, 0x07, 0x92, 0x6c, 0xdd, 0x8e, 0xe4, 0x3c, 0x9b, 0x12, 0x4b],
    [0x07, 0xa1, 0xed, 0x2b, 0x76, 0x69, 0x49, 0x7d, 0xfa, 0x85, 0xeb, 0xb0, 0xdc, 0x5e, 0x6b, 0xff, 0x82, 0xd7, 0x91, 0x16, 0x02, 0x34, 0xcb, 0x8c, 0x73, 0xea, 0x2e, 0xd2, 0x2e, 0x69, 0xa8, 0x69],
    [0x99, 0x13, 0xba, 0x9f, 0xff, 0x71, 0xab, 0x46, 0x74, 0x1c, 0x4b, 0x45, 0x24, 0x30, 0x6f, 0x07, 0xd2, 0x9f, 0x40, 0x6d, 0xf6, 0x12, 0xc1, 0x22, 0xc6, 0xde, 0x1d, 0x8c, 0xee, 0x56, 0xda, 0x23],
    [0x75, 0x3d, 0xb9, 0x01, 0x0f, 0xd2, 0x6d, 0x6a, 0x05, 0x84, 0x43, 0x76, 0x8d, 0x40, 0xda, 0x21, 0x4a, 0xbf, 0x1e, 0x39, 0x65, 0x64, 0x99, 0x53, 0xe7, 0xd8, 0xbc, 0x5a, 0x3d, 0x36, 0xa5, 0x2d],
    [0x63, 0xa7, 0x19, 0xf1, 0x9b, 0x26, 0x4f, 0xe5, 0x0c, 0x71, 0xb9, 0x0e, 0xb1, 0xc9, 0x40, 0xbd, 0x62, 0x5b, 0xb3, 0x5a, 0xaa, 0x1b, 0xe1, 0xbd, 0xde, 0xb7, 0x7d, 0x19, 0x66, 0x21, 0x15, 0x11],
    [0x2a, 0xb3, 0xb7, 0xd0, 0xf9, 0x76, 0x12, 0x51, 0x14, 0x6c, 0x0c, 0x79, 0x21, 0x34, 0x5d, 0xa8, 0x14, 0x6b, 0xef, 0x63, 0xdb, 0xa0, 0xfa, 0x8d, 0xf0, 0xda, 0x06, 0xc2, 0x27, 0x52, 0xda, 0x6c],
    [0x43, 0x2c, 0xa1, 0xd5, 0xd1, 0xff, 0x64, 0xcd, 0xd1, 0x3a, 0x98, 0xef, 0x2a, 0x3c, 0x0d, 0x8d, 0x52, 0x46, 0x4b, 0xe4, 0x53, 0x95, 0x4f, 0x87, 0xa6, 0xea, 0x94, 0x20, 0x81, 0x14, 0xd3, 0x71],
    [0x2c, 0x9c, 0xe1, 0x7d, 0xa5, 0xfa, 0x3e, 0xd9, 0x27, 0xa7, 0xe3, 0x87, 0xc5, 0x16, 0x73, 0xc4, 0x27, 0xe9, 0x9c, 0xb5, 0x65, 0xc5, 0x82, 0x99, 0xc2, 0x94, 0x37, 0x4b, 0xc0, 0xe3, 0xd7, 0x1e],
    [0xe1, 0x24, 0xeb, 0x26, 0xac, 0x46, 0xde, 0x43, 0xd4, 0x9a, 0x2a, 0x7c, 0x90, 0x4a, 0x1e, 0x10, 0xb9, 0x25, 0x96, 0xdd, 0xc7, 0x9b, 0x84, 0xfb, 0xf3, 0x83, 0xe6, 0xfa, 0xa7, 0xe4, 0xff, 0x60],
    [0x1e, 0xce, 0x65, 0xae, 0xb7, 0xe1, 0xfc, 0xfa, 0x7e, 0x98, 0xe5, 0x05, 0xa4, 0x76, 0xd1, 0x5f, 0x0a, 0x7f, 0x2a, 0xae, 0x5a, 0x73, 0x67, 0x54, 0x17, 0x98, 0xd0, 0x6f, 0x48, 0x02, 0x43, 0x3a],
    [0x05, 0xf5, 0x0d, 0xcf, 0x2f, 0x87, 0x78, 0x15, 0xbd, 0x4b, 0xfb, 0xea, 0xbc, 0xbd, 0x46, 0xdf, 0x51, 0x16, 0x2b, 0x88, 0x81, 0x63, 0x2d, 0x3b, 0x41, 0x9b, 0xc6, 0xd1, 0xb8, 0x41, 0x11, 0x32],
    [0xf1, 0x3b, 0x87, 0xce, 0x3e, 0x12, 0xb1, 0x1a, 0x70, 0x2c, 0xfb, 0xfd, 0xe5, 0x20, 0x59, 0x95, 0x9b, 0xbe, 0x1b, 0xf7, 0x87, 0xbe, 0xc5, 0x2f, 0x8c, 0x38, 0x54, 0x5c, 0xbb, 0x45, 0xd5, 0x7d],
    [0x05, 0x91, 0x05, 0x5d, 0x9e, 0x71, 0x87, 0x02, 0x09, 0x77, 0xdb, 0xe1, 0x16, 0xa3, 0xae, 0x33, 0x04, 0xe7, 0xa5, 0xf1, 0x16, 0x3a, 0xbd, 0xe0, 0x4e, 0xff, 0xd2, 0x51, 0x7b, 0xea, 0x34, 0x1a],
    [0x30, 0x85, 0x2c, 0xf2, 0xa4, 0xb9, 0xd2, 0x5e, 0x8c, 0x4c, 0x3e, 0x8e, 0xd2, 0xe0, 0x75, 0xb6, 0x5a, 0xcd, 0x76, 0x12, 0x11, 0x59, 0xbd, 0x97, 0x01, 0x54, 0xc8, 0xd4, 0xa0, 0xe3, 0x79, 0x34],
    [0x02, 0x58, 0x11, 0xc3, 0x02, 0x0c, 0x53, 0xe6, 0x19, 0x84, 0xf8, 0xbd, 0xa7, 0x9e, 0xe4, 0x45, 0x4b, 0xbe, 0x3d, 0x8e, 0xfc, 0xc1, 0x22, 0x8b, 0x37, 0x9a, 0x1b, 0x47, 0x5d, 0x37, 0xde, 0x1c],
    [0xf5, 0x1f, 0x75, 0x2d, 0xe0, 0x3a, 0xb6, 0xf0, 0xcd, 0x30, 0x72, 0x5d, 0xa0, 0x4a, 0x24, 0xca, 0xfa, 0xf2, 0x9f, 0x42, 0x52, 0x81, 0x62, 0x3e, 0x7a, 0x66, 0xd7, 0x63, 0x0d, 0x02, 0x8a, 0x7e],
    [0xb9, 0xb3, 0xb0, 0x33, 0x50, 0xdd, 0x55, 0xce, 0x15, 0xa3, 0x11, 0xb4, 0xbd, 0xee, 0x88, 0xa9, 0xf0, 0xff, 0x40, 0xda, 0x2b, 0x8e, 0xc3, 0x74, 0x88, 0x5c, 0x90, 0x91, 0x30, 0x47, 0x95, 0x23],
    [0xde, 0xd4, 0x56, 0x7d, 0xb1, 0x98, 0x5b, 0x26, 0xa4, 0xd9, 0x5e, 0x07, 0xe0, 0x25, 0x1e, 0xb5, 0x20, 0x7c, 0x46, 0x01, 0x22, 0x47, 0xae, 0xff, 0x5d, 0xb2, 0x19, 0x2d, 0x7a, 0x6d, 0xdb, 0x17],
    [0x45, 0x16, 0xa7, 0xd6, 0x76, 0x3d, 0xab, 0x7d, 0x11, 0xd7, 0xab, 0xda, 0xb5, 0xeb, 0x81, 0x18, 0x29, 0xe7, 0x71, 0x6b, 0x9c, 0xc8, 0x59, 0x58, 0xe3, 0x0c, 0xdb, 0xd3, 0x5e, 0xca, 0x3c, 0x43],
    [0x0d, 0xd3, 0x21, 0xcb, 0x07, 0x95, 0x57, 0x48, 0x18, 0x7c, 0x7e, 0xf7, 0x20, 0x2a, 0x3e, 0x6f, 0x27, 0xaa, 0x1d, 0xb2, 0x8b, 0xcb, 0x8b, 0x27, 0xd2, 0x23, 0xa8, 0xde, 0x33, 0x19, 0x45, 0x13],
    [0xd8, 0x8a, 0x57, 0x5e, 0xb0, 0x80, 0xc5, 0xb2, 0xee, 0x39, 0x9d, 0x1a, 0x42, 0x2d, 0xf8, 0x17, 0xb4, 0x41, 0xfe, 0xf5, 0x8b, 0x2e, 0x66, 0x82, 0x27, 0x71, 0x76, 0x19, 0xfc, 0xf2, 0x7b, 0x38],
    [0x6f, 0x40, 0xfd, 0x00, 0x39, 0xdd, 0xf7, 0x3d, 0xfa, 0xe1, 0x86, 0x6d, 0xcc, 0x40, 0x15, 0x18, 0x87, 0x25, 0xe1, 0xdf, 0x87, 0x4a, 0xe1, 0x59, 0x16, 0xf7, 0xa1, 0xf6, 0xc4, 0xd5, 0xb3, 0x14],
    [0x3f, 0x07, 0x14, 0x77, 0x7f, 0xed, 0x4a, 0x54, 0x5e, 0x19, 0x01, 0x3e, 0xff, 0x76, 0xb4, 0x40, 0x51, 0x4a, 0xb3, 0x35, 0xe9, 0xe9, 0x6f, 0xe9, 0x3f, 0xd6, 0x4f, 0xcb, 0xa8, 0x53, 0xf1, 0x12],
    [0xcc, 0x17, 0xf8, 0x6d, 0x82, 0xd3, 0xb5, 0x52, 0xf7, 0x69, 0x1d, 0x30, 0x00, 0x1b, 0x7a, 0x9d, 0x2f, 0x19, 0x6e, 0x78, 0x83, 0xca, 0xe1, 0xd2, 0x38, 0x2f, 0xf2, 0x46, 0xa8, 0x3f, 0x09, 0x5e],
    [0x40, 0x3f, 0x81, 0xea, 0xd0, 0x4d, 0xe1, 0xfe, 0x1d, 0x5d, 0xe7, 0xf4, 0x6e, 0x53, 0xb0, 0x59, 0x9c, 0x14, 0x36, 0xf7, 0xaa, 0xc7, 0xd9, 0x2d, 0x26, 0x82, 0xe8, 0xa8, 0x68, 0x45, 0x68, 0x71],
    [0x86, 0xbf, 0x24, 0xb9, 0x96, 0xe8, 0x4c, 0x7f, 0x67, 0xba, 0x6a, 0x4d, 0xa9, 0x4b, 0x83, 0xfb, 0x78, 0xf0, 0x04, 0xaa, 0xdb, 0xd2, 0x50, 0x1c, 0xbb, 0xd2, 0x21, 0x43, 0xb5, 0xa9, 0x12, 0x57],
    [0x2b, 0xd7, 0xb2, 0x28, 0xe3, 0x1d, 0x2c, 0x2d, 0x78, 0xeb, 0xc0, 0xca, 0x66, 0xfd, 0xda, 0x66, 0xee, 0xe5, 0x4c, 0x5d, 0xe7, 0x70, 0xaa, 0x11, 0x4e, 0x8b, 0x69, 0x72, 0x35, 0xba, 0x6e, 0x7d],
    [0x05, 0x7b, 0x15, 0x46, 0x4c, 0xc6, 0x36, 0xe9, 0xd0, 0x0c, 0xa2, 0x62, 0xb0, 0xd6, 0xb6, 0x02, 0x2c, 0x6d, 0xa2, 0x2a, 0xd0, 0xd6, 0x22, 0xca, 0x34, 0x5c, 0x62, 0xa8, 0x5d, 0x80, 0x29, 0x0f],
    [0x56, 0x2d, 0xc0, 0x3b, 0xc9, 0x09, 0x2e, 0x0d, 0x55, 0x64, 0xff, 0x08, 0xe6, 0x7c, 0x4d, 0x9e, 0x80, 0x39, 0x13, 0x68, 0xba, 0x2f, 0x6d, 0x50, 0x39, 0xe8, 0xc7, 0x63, 0xea, 0x1e, 0xb4, 0x4a],
    [0x23, 0x7c, 0xb0, 0x4c, 0xf8, 0xd3, 0x57, 0x8d, 0x97, 0xe4, 0x0c, 0xdd, 0xb8, 0xa4, 0xd0, 0xaa, 0xec, 0x09, 0x69, 0x90, 0x50, 0xcc, 0x56, 0x4d, 0x7f, 0x57, 0x20, 0x81, 0x77, 0xae, 0xb4, 0x52],
    [0x19, 0x62, 0xf3, 0x23, 0xe3, 0x6f, 0x53, 0x9d, 0x65, 0x47, 0xe0, 0x4b, 0x48, 0xb3, 0xdb, 0x8b, 0x1c, 0xc5, 0xb4, 0xdf, 0x0b, 0xb9, 0x85, 0xd9, 0xc0, 0xd1, 0x93, 0x28, 0x2f, 0xa6, 0xbe, 0x73],
    [0x2e, 0x0b, 0xe4, 0x95, 0x96, 0x8a, 0x50, 0x3b, 0x42, 0xe5, 0x08, 0x44, 0x64, 0xc4, 0x08, 0xc8, 0xce, 0xdf, 0x85, 0x38, 0x2b, 0x9c, 0x52, 0x11, 0x8b, 0xbb, 0x61, 0x86, 0x0f, 0xa4, 0x38, 0x22],
    [0xcf, 0x2f, 0xa8, 0x71, 0x4d, 0xd5, 0x68, 0x4c, 0x7f, 0xb5, 0x97, 0x51, 0x90, 0x5f, 0xa0, 0x2f, 0x0d, 0xd7, 0xc4, 0xa3, 0xa8, 0x9d, 0x22, 0xc4, 0x58, 0xb6, 0x8d, 0x56, 0xec, 0x74, 0x36, 0x16],
    [0x14, 0x12, 0xa2, 0x0b, 0x0b, 0x07, 0xed, 0xa3, 0xcb, 0x11, 0xd4, 0x49, 0xab, 0x89, 0x0f, 0x09, 0xb0, 0x65, 0x12, 0xf2, 0xb4, 0x4b, 0x55, 0x47, 0xd7, 0x85, 0x59, 0x4d, 0x6e, 0x45, 0xd7, 0x2e],
    [0xb4, 0xef, 0xec, 0x5c, 0x0a, 0x77, 0x83, 0xe5, 0x8d, 0xe0, 0xdb, 0x80, 0x02, 0x53, 0x9c, 0x83, 0xf0, 0x09, 0xac, 0x81, 0x60, 0x95, 0xf3, 0x91, 0xc3, 0xf0, 0x54, 0xd4, 0x26, 0xa4, 0x1a, 0x5c],
    [0xe7, 0x56, 0x90, 0x75, 0x4e, 0x26, 0x81, 0x8e, 0xd4, 0x21, 0x87, 0x42, 0x2d, 0xd3, 0xf5, 0xa1, 0x64, 0xcb, 0xdf, 0xd8, 0x8d, 0xf4, 0x9b, 0x04, 0xc7, 0x07, 0xcc, 0x4a, 0xaf, 0x7b, 0xae, 0x50],
    [0x0f, 0x3c, 0xd6, 0x40, 0xa2, 0x06, 0x6f, 0x9d, 0x86, 0x04, 0xeb, 0x09, 0x70, 0xe7, 0x35, 0x75, 0x2b, 0x72, 0x1c, 0x75, 0xee, 0x01, 0xa3, 0x5e, 0xbe, 0x0f, 0x63, 0x15, 0xa5, 0x91, 0xa8, 0x71],
    [0x19, 0xc1, 0x84, 0xf3, 0x5e, 0x05, 0xac, 0xed, 0xb6, 0x50, 0x4d, 0xa8, 0x6f, 0x73, 0x5e, 0xb9, 0xc5, 0xa9, 0x16, 0x69, 0xbd, 0xf8, 0x3d, 0x76, 0x88, 0x71, 0x82, 0x1e, 0xf2, 0x4c, 0x32, 0x4c],
    [0xe2, 0x9a, 0xcf, 0x03, 0x55, 0xd8, 0x60, 0x51, 0x10, 0x47, 0xbc, 0x64, 0xf1, 0xc3, 0x3a, 0x81, 0x09, 0xd1, 0x98, 0x6a, 0x5b, 0xfe, 0x3a, 0x2e, 0x1f, 0xd1, 0x54, 0x45, 0x16, 0xbb, 0x55, 0x59],
    [0x38, 0xb5, 0x21, 0x60, 0x62, 0x7a, 0x55, 0xe7, 0xeb, 0xf0, 0xf9, 0xcc, 0x98, 0x0d, 0x0f, 0x03, 0xa6, 0x87, 0x6a, 0x64, 0xa8, 0xa8, 0xbb, 0x8b, 0x0f, 0xf4, 0x6b, 0x95, 0xf3, 0x93, 0x6e, 0x03],
    [0x78, 0xf4, 0x35, 0xc0, 0x3f, 0x81, 0x01, 0xcc, 0x3e, 0x04, 0x0d, 0x2e, 0x25, 0x4e, 0xf1, 0xda, 0xe3, 0xa9, 0x18, 0x20, 0xaa, 0x22, 0x86, 0x73, 0x76, 0xa3, 0xa6, 0x8a, 0x37, 0x1f, 0xc9, 0x45],
    [0xb6, 0x52, 0xc9, 0x0d, 0xab, 0x97, 0xcc, 0x66, 0xd1, 0x2e, 0x30, 0x96, 0x06, 0x81, 0xc9, 0x1c, 0xba, 0xa9, 0x33, 0x7d, 0x1b, 0x98, 0x73, 0x41, 0xb7, 0x25, 0xe9, 0xa0, 0xbb, 0xc0, 0x7b, 0x4d],
    [0xf0, 0xea, 0x11, 0x80, 0x6d, 0x2f, 0x36, 0xfd, 0x68, 0x35, 0x97, 0x13, 0xf9, 0xb0, 0x7c, 0x2d, 0xeb, 0xaf, 0xfd, 0x85, 0xa6, 0x63, 0x56, 0x5b, 0x40, 0xa3, 0xe9, 0x97, 0x07, 0x2d, 0x47, 0x40],
    [0x05, 0x15, 0x1e, 0x2a, 0x45, 0xcd, 0x1b, 0xa1, 0xa3, 0x3b, 0xc1, 0x4f, 0xec, 0x37, 0x8c, 0x9b, 0xf0, 0x50, 0x96, 0x2a, 0x71, 0x91, 0xdd, 0x17, 0x47, 0x64, 0x94, 0xb7, 0x88, 0xba, 0x13, 0x79],
    [0xf7, 0x6b, 0xb7, 0x65, 0xf4, 0xc4, 0x44, 0x69, 0x8e, 0x56, 0x3a, 0xd8, 0x84, 0xa7, 0x7c, 0x77, 0x27, 0xe3, 0x2a, 0x2e, 0x72, 0x45, 0xa4, 0xb0, 0x71, 0x7b, 0x42, 0x5a, 0x48, 0xd0, 0x88, 0x0d],
    [0xbd, 0x9b, 0x04, 0x7f, 0x5a, 0xe4, 0x96, 0x03, 0x4b, 0x82, 0xa8, 0x94, 0x4e, 0x3c, 0x1e, 0x1b, 0x29, 0x56, 0x62, 0x43, 0x2b, 0x52, 0x86, 0x5e, 0xd0, 0x86, 0x90, 0x6f, 0x65, 0x5b, 0xfc, 0x43],
    [0xe9, 0xf6, 0x76, 0x63, 0x0b, 0x63, 0x47, 0x2c, 0x8e, 0x8c, 0x99, 0xb0, 0xa7, 0xb9, 0x46, 0xa5, 0xb4, 0xa6, 0xda, 0x28, 0x03, 0x6d, 0xc3, 0xdb, 0xc6, 0x71, 0xe3, 0xe1, 0x1e, 0x41, 0x0d, 0x25],
    [0xa0, 0x71, 0x00, 0x53, 0xab, 0xd8, 0x25, 0x67, 0x48, 0xd5, 0x9b, 0xec, 0xca, 0xe0, 0xb4, 0xb5, 0x14, 0xb9, 0x20, 0x4f, 0x52, 0xad, 0x3b, 0x8d, 0xcd, 0xc9, 0xfb, 0xa3, 0x60, 0x58, 0x84, 0x2b],
    [0x8a, 0x1a, 0xb9, 0x32, 0xa5, 0x15, 0xb7, 0xfe, 0x0f, 0x83, 0xf1, 0x45, 0xb9, 0xac, 0x1a, 0x21, 0x4e, 0xa0, 0xe9, 0xe8, 0x86, 0xee, 0x99, 0xb9, 0xad, 0xf6, 0xd0, 0xff, 0x9c, 0x14, 0xf7, 0x00],
    [0x5e, 0x8c, 0xd8, 0x85, 0x79, 0x54, 0xf8, 0x27, 0xf5, 0xf7, 0x37, 0x0e, 0x22, 0xae, 0x90, 0x03, 0x0f, 0x09, 0xc4, 0xc8, 0x90, 0x29, 0x2b, 0xc1, 0xcc, 0x59, 0x99, 0xa4, 0xb6, 0x31, 0x19, 0x35],
    [0x0f, 0xb0, 0xdf, 0x1a, 0xbe, 0x9a, 0x8b, 0xe9, 0xdc, 0x75, 0x88, 0x0f, 0x1b, 0x46, 0xa7, 0x28, 0x71, 0x10, 0xf3, 0xdb, 0xc6, 0x9f, 0x6c, 0xf5, 0xed, 0xdd, 0x7b, 0x01, 0xdc, 0x1f, 0xd9, 0x43],
    [0x98, 0x66, 0xe8, 0x63, 0x03, 0x55, 0xaf, 0x6f, 0x3b, 0x9e, 0x2f, 0x42, 0x0f, 0xaf, 0xcf, 0x08, 0xd1, 0x32, 0xda, 0x25, 0xb6, 0x2f, 0x90, 0xfa, 0x76, 0xf4, 0xfd, 0x08, 0x5e, 0xd3, 0x8a, 0x09],
    [0x07, 0xee, 0x03, 0xf3, 0x14, 0x8f, 0xac, 0xeb, 0x49, 0xa5, 0x7d, 0x7b, 0xf2, 0xed, 0x25, 0xfa, 0xc5, 0xbf, 0xf7, 0xfc, 0xde, 0xd5, 0x84, 0x6e, 0x39, 0x29, 0x1c, 0xc8, 0x5e, 0x58, 0xa6, 0x4d],
    [0xa1, 0x6c, 0xd5, 0xe7, 0x75, 0xa3, 0xd0, 0xfd, 0x1e, 0x91, 0x09, 0xed, 0xaa, 0x67, 0xce, 0x3b, 0x20, 0xad, 0xa8, 0x56, 0xb7, 0xc4, 0x5a, 0xd8, 0xc9, 0x76, 0x57, 0x44, 0x9f, 0xaa, 0xdc, 0x03],
    [0xd2, 0x89, 0x7a, 0x05, 0x39, 0x77, 0x63, 0x1b, 0x31, 0xe0, 0xe0, 0xbf, 0x18, 0xbc, 0x01, 0xe3, 0x60, 0x8a, 0x63, 0x8a, 0x30, 0x50, 0xb7, 0xa6, 0xb0, 0x00, 0xbd, 0x05, 0x51, 0x20, 0x88, 0x38],
    [0xf8, 0x91, 0xc3, 0x14, 0x8c, 0x6a, 0x6f, 0x83, 0xaf, 0x11, 0xd6, 0x35, 0xd3, 0x7f, 0x6f, 0x88, 0x69, 0xa1, 0x5b, 0xac, 0xf3, 0x81, 0xd3, 0xdf, 0x50, 0xbd, 0x38, 0xdf, 0x66, 0xa7, 0x39, 0x6e],
    [0xa2, 0x5e, 0xdf, 0xe3, 0x65, 0xea, 0xd3, 0xe3, 0x7f, 0xbe, 0x23, 0x9d, 0x06, 0xce, 0xcf, 0x37, 0x47, 0x94, 0xa5, 0x90, 0xa6, 0x51, 0x50, 0x51, 0x62, 0x6e, 0xed, 0xa2, 0xc5, 0x0c, 0x1c, 0x61],
    [0xb5, 0x30, 0x2f, 0x03, 0xe3, 0xfe, 0xe2, 0x95, 0x3a, 0xd8, 0xd1, 0x77, 0xec, 0xb6, 0x78, 0x0e, 0x8b, 0xf6, 0x4b, 0x43, 0xb3, 0xe7, 0xcc, 0xf6, 0xbc, 0x62, 0x18, 0xa7, 0x50, 0x10, 0x9b, 0x4b],
    [0x3f, 0x62, 0x65, 0xc3, 0x43, 0x2c, 0x95, 0xcc, 0x46, 0x67, 0x9b, 0xf1, 0x16, 0x12, 0x04, 0x0b, 0x32, 0xf8, 0x8a, 0x75, 0x98, 0xa0, 0x40, 0xf8, 0x40, 0x84, 0x1f, 0x64, 0xe3, 0xfd, 0xd8, 0x79],
    [0x11, 0xa0, 0xae, 0xe7, 0x3e, 0xd3, 0x47, 0x5a, 0x2b, 0x0c, 0xb6, 0xca, 0x3a, 0xf9, 0x34, 0xc8, 0x83, 0x33, 0x49, 0xab, 0x6e, 0xe7, 0x06, 0x00, 0x3d, 0x66, 0x9d, 0xea, 0xeb, 0xd0, 0x2f, 0x52],
    [0xef, 0x44, 0x52, 0xd1, 0x8f, 0x99, 0x1f, 0x5c, 0xde, 0x96, 0x89, 0x43, 0x4b, 0x69, 0xa0, 0x1d, 0xa2, 0x77, 0x29, 0x85, 0xc2, 0x28, 0x7e, 0xc9, 0x3d, 0x6b, 0x9f, 0xb0, 0xd5, 0x2f, 0xde, 0x17],
    [0x23, 0xe3, 0x10, 0x5d, 0x8d, 0xd3, 0x1e, 0x20, 0xf8, 0x01, 0x61, 0x90, 0x30, 0x02, 0x39, 0x02, 0xd4, 0x22, 0x0f, 0x72, 0xf6, 0xa7, 0x63, 0x66, 0x34, 0x50, 0xbf, 0x23, 0x78, 0xf6, 0xc5, 0x69],
    [0xd7, 0x2c, 0xb8, 0xee, 0x1e, 0xb5, 0xcd, 0xde, 0x4c, 0x42, 0x3c, 0x87, 0xd2, 0x70, 0xde, 0x14, 0xb0, 0xba, 0x8b, 0x00, 0x02, 0x32, 0x72, 0xe5, 0xec, 0xf7, 0x44, 0xde, 0x6e, 0xcd, 0x9d, 0x09],
    [0xbc, 0x9b, 0x83, 0x3b, 0x91, 0xb8, 0xf7, 0xed, 0x62, 0xb4, 0xef, 0x33, 0xfa, 0x1c, 0x68, 0x11, 0xb8, 0xa0, 0x46, 0x64, 0x35, 0xf1, 0x99, 0xe8, 0x49, 0x99, 0x44, 0x14, 0x2d, 0x0f, 0xaa, 0x3d],
    [0x5e, 0xa1, 0x8a, 0xe7, 0x74, 0xff, 0x23, 0xbe, 0x92, 0xea, 0xe0, 0x88, 0x46, 0x69, 0xb4, 0xb5, 0x96, 0x96, 0xb5, 0x06, 0xb1, 0x5b, 0x31, 0xcc, 0xed, 0x73, 0xf7, 0xa2, 0xee, 0x6b, 0xfe, 0x76],
    [0xf9, 0xec, 0xbf, 0xe8, 0x3b, 0x9d, 0x91, 0xc3, 0xe6, 0xb5, 0x19, 0x2f, 0xa1, 0x54, 0x0c, 0xde, 0x55, 0xf0, 0x94, 0x4b, 0x2d, 0x4b, 0x19, 0x71, 0x78, 0x26, 0x5c, 0x12, 0x77, 0xa1, 0xae, 0x2d],
    [0xe4, 0xd0, 0x70, 0xc3, 0xc4, 0xb8, 0x82, 0xc4, 0x8e, 0xb0, 0xcd, 0x11, 0xd9, 0x37, 0xaf, 0xa3, 0x8c, 0x34, 0x23, 0x61, 0x4c, 0xba, 0x26, 0x2e, 0xcc, 0xfe, 0xe2, 0x7b, 0xb9, 0x28, 0x31, 0x3e],
    [0x24, 0x3b, 0x12, 0x85, 0x2a, 0x26, 0x58, 0x7e, 0xed, 0x18, 0x9e, 0x9b, 0x59, 0x1c, 0x75, 0xdc, 0x73, 0xa4, 0x35, 0x69, 0xc4, 0x00, 0xee, 0xc7, 0x16, 0x17, 0x1e, 0x9c, 0x5e, 0xf5, 0x13, 0x4a],
    [0x17, 0x62, 0x63, 0x1b, 0xd9, 0x82, 0xcf, 0xc8, 0x8d, 0x47, 0x10, 0xaa, 0x84, 0xe4, 0x66, 0x08, 0xcd, 0xb3, 0xe9, 0xed, 0x2c, 0x9f, 0x93, 0xed, 0x9a, 0x73, 0x0e, 0x6f, 0x61, 0xd6, 0x40, 0x00],
    [0x19, 0xa2, 0x3a, 0x17, 0x0a, 0x91, 0x69, 0x39, 0xe7, 0x82, 0xea, 0xd0, 0xc2, 0x37, 0x42, 0x38, 0xc8, 0x5d, 0xae, 0xf4, 0x2c, 0x9d, 0x75, 0x33, 0x66, 0x37, 0xa5, 0x59, 0xf7, 0x43, 0x56, 0x75],
    [0xb6, 0x8f, 0x0b, 0xc4, 0x73, 0x34, 0xe8, 0x06, 0x3f, 0x17, 0x51, 0x95, 0x13, 0x39, 0x2b, 0xb7, 0x74, 0x61, 0x68, 0x3d, 0xcf, 0x7b, 0xb5, 0x7b, 0x6f, 0x02, 0x40, 0x6b, 0x21, 0x32, 0x50, 0x70],
    [0xce, 0x11, 0x20, 0x99, 0x0b, 0x70, 0x1d, 0xca, 0xd0, 0xe2, 0xda, 0x00, 0xf1, 0xef, 0xe6, 0x53, 0x00, 0x66, 0x32, 0x35, 0xcf, 0x5e, 0xe8, 0x5f, 0x10, 0xf8, 0x87, 0x54, 0xb0, 0xd4, 0xdc, 0x6b],
    [0xcc, 0xca, 0xb4, 0xe6, 0xba, 0x81, 0x9e, 0x5b, 0xfc, 0x53, 0xb6, 0xb5, 0x37, 0x17, 0x88, 0xa9, 0x5f, 0x40, 0xe7, 0x97, 0xc7, 0x55, 0xca, 0xe4, 0x7b, 0x7a, 0xa3, 0x11, 0xcf, 0x0e, 0x67, 0x10],
    [0x05, 0x41, 0x68, 0x55, 0x44, 0x53, 0x81, 0x44, 0x00, 0x9a, 0x60, 0x5f, 0x94, 0x6d, 0xaa, 0x6f, 0xeb, 0xaa, 0xf5, 0x70, 0x35, 0xe1, 0x04, 0x92, 0x71, 0x1d, 0xb3, 0x71, 0x05, 0xd1, 0x9e, 0x48],
    [0x2b, 0x03, 0xdf, 0xb1, 0x09, 0x58, 0xa8, 0x8a, 0x6f, 0xfc, 0xa1, 0x86, 0x9b, 0x08, 0x6b, 0xdd, 0x8c, 0x39, 0x29, 0xaa, 0x57, 0xca, 0xf4, 0x6c, 0x21, 0xad, 0x64, 0x89, 0xcb, 0xb0, 0xab, 0x02],
    [0x7d, 0xf0, 0x94, 0x8b, 0xda, 0x5d, 0x71, 0x97, 0x71, 0x1f, 0xd3, 0x0a, 0x51, 0x71, 0x16, 0x39, 0xcf, 0xa1, 0xb9, 0xf8, 0x2d, 0xdd, 0x21, 0x82, 0x81, 0x71, 0x13, 0xf3, 0x07, 0x0a, 0xe0, 0x6a],
    [0x61, 0x4b, 0x34, 0x55, 0xef, 0x3f, 0x8b, 0xf1, 0x35, 0x8b, 0xd9, 0x88, 0x37, 0xc9, 0xb1, 0xca, 0x82, 0xe5, 0xd8, 0xb8, 0x1e, 0x32, 0x1e, 0x3a, 0xb7, 0x0c, 0x32, 0x22, 0xb6, 0x6a, 0x2b, 0x3b],
    [0x0f, 0x1f, 0x19, 0x42, 0x7e, 0x36, 0x4b, 0xb6, 0xa5, 0x62, 0x88, 0xbb, 0xcd, 0x04, 0x7d, 0xb4, 0x41, 0x5c, 0x95, 0x0b, 0x38, 0xa5, 0xf9, 0x1a, 0x91, 0x6b, 0x95, 0xb8, 0xb2, 0xee, 0x59, 0x3a],
    [0x3b, 0xe1, 0xa0, 0x5b, 0x56, 0x50, 0x41, 0x02, 0x88, 0x71, 0xa3, 0x30, 0x4a, 0x7f, 0x7a, 0x25, 0x95, 0x72, 0x04, 0x75, 0xfe, 0xf5, 0xb9, 0x55, 0xae, 0xbe, 0x91, 0x9c, 0xa5, 0xaf, 0xe2, 0x09],
    [0x19, 0xdb, 0x46, 0x7b, 0x18, 0xac, 0x0b, 0x00, 0x0d, 0x01, 0x49, 0xec, 0xcb, 0x81, 0xd1, 0x7c, 0xcd, 0x75, 0xd1, 0xa7, 0x61, 0xe5, 0xb6, 0xe2, 0x63, 0xe0, 0x6f, 0x78, 0x68, 0x66, 0x86, 0x08],
    [0xc8, 0x6c, 0xdf, 0xb7, 0xbe, 0x1f, 0x93, 0x9b, 0xb8, 0xb0, 0xd8, 0x0a, 0x7a, 0xa0, 0xfb, 0x41, 0x3f, 0x11, 0x8f, 0xe1, 0x82, 0xc9, 0xf6, 0x27, 0xd1, 0x95, 0xc9, 0xd3, 0x5d, 0x27, 0x1a, 0x6b],
    [0x38, 0xf6, 0x2a, 0xb1, 0x18, 0x97, 0xb2, 0x16, 0x85, 0xba, 0x5f, 0x51, 0xba, 0xb3, 0x7c, 0x29, 0x9b, 0x32, 0x6c, 0x58, 0x4f, 0x00, 0xfa, 0x21, 0xd1, 0x84, 0x56, 0xb6, 0x46, 0x97, 0xab, 0x64],
    [0x7c, 0xd7, 0xd8, 0x3d, 0xbb, 0x2e, 0xfc, 0x37, 0xcf, 0xf7, 0x9e, 0x75, 0xd9, 0x5f, 0xc0, 0x00, 0x73, 0xfe, 0xef, 0x85, 0x32, 0x9a, 0xc9, 0x60, 0x4c, 0x8b, 0xdf, 0x6d, 0x1a, 0x70, 0x8f, 0x7e],
    [0x63, 0x74, 0x8b, 0xc7, 0x47, 0xcc, 0xe9, 0x50, 0x20, 0xc3, 0x71, 0x75, 0xec, 0xab, 0x52, 0x29, 0x6d, 0x90, 0x84, 0x1f, 0xbc, 0x45, 0x7b, 0x40, 0x2c, 0x24, 0xd5, 0xe1, 0x06, 0xa3, 0x4c, 0x51],
    [0xb7, 0x11, 0xfc, 0xd2, 0x83, 0x3f, 0x3e, 0x34, 0x5f, 0x92, 0xef, 0x71, 0xef, 0xa5, 0x60, 0xb0, 0xaa, 0x22, 0xec, 0x29, 0xb8, 0xc8, 0x39, 0x80, 0x7f, 0x8d, 0xfc, 0x7a, 0x53, 0x75, 0x53, 0x35],
];

pub const ECFFT_FQ_ISO_NUM: [[[u8; 32]; 3]; 7] = [
    [
        [0x95, 0xc2, 0xe7, 0x1d, 0xcd, 0x8f, 0x47, 0x9a, 0xfa, 0xcb, 0x51, 0xe5, 0x20, 0xa9, 0x8c, 0x4b, 0xfa, 0x03, 0x3e, 0x1e, 0xc7, 0x5b, 0x0a, 0x3b, 0x36, 0x5b, 0xc2, 0x39, 0xea, 0x4d, 0x9f, 0x30],
        [0x05, 0x17, 0x0d, 0x30, 0x2e, 0x51, 0x46, 0x50, 0xaf, 0x24, 0x3a, 0x7d, 0xec, 0x62, 0xd1, 0x82, 0xd5, 0x08, 0x15, 0x5b, 0x4b, 0xd9, 0x2c, 0xac, 0xdc, 0x4e, 0x6d, 0x9d, 0x17, 0x7d, 0x99, 0x4d],
        [0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    ],
    [
        [0xaf, 0x7a, 0xcd, 0x6e, 0x1b, 0x4b, 0x3c, 0x45, 0x6f, 0x41, 0xeb, 0x39, 0xaf, 0x98, 0xb7, 0x35, 0x7b, 0x87, 0x0e, 0x3a, 0x35, 0x63, 0x65, 0x55, 0x82, 0xc7, 0xee, 0xbe, 0xc7, 0xe4, 0xf2, 0x48],
        [0x35, 0x9f, 0x8e, 0x14, 0x13, 0xa8, 0x20, 0xb3, 0x48, 0x0b, 0xd8, 0xaa, 0x1e, 0x01, 0x0c, 0x28, 0xf7, 0x9f, 0x4c, 0x88, 0x55, 0x88, 0xc4, 0x57, 0x1e, 0x37, 0x07, 0xa1, 0xa4, 0x19, 0x9f, 0x4a],
        [0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    ],
    [
        [0x8c, 0x18, 0x4d, 0xb3, 0x37, 0x75, 0x54, 0x41, 0xb3, 0xc5, 0x6e, 0x88, 0x7d, 0x31, 0x87, 0x58, 0xa5, 0xfd, 0x0f, 0x47, 0xc6, 0x9f, 0x74, 0x6e, 0xbc, 0xa1, 0xd0, 0xd6, 0x78, 0x10, 0x3b, 0x28],
        [0x3c, 0x4c, 0xb5, 0x51, 0xda, 0x8e, 0x99, 0x67, 0xc0, 0xcb, 0xf5, 0x5f, 0xe1, 0x93, 0x63, 0xce, 0xc2, 0x08, 0x46, 0x23, 0x33, 0xe8, 0xcf, 0x33, 0x5f, 0x43, 0x21, 0x75, 0x78, 0x96, 0x76, 0x20],
        [0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    ],
    [
        [0x69, 0x32, 0xfa, 0x8b, 0x09, 0x56, 0x34, 0xce, 0x96, 0xb5, 0x99, 0x8c, 0x3d, 0xd2, 0xa8, 0x7d, 0x7b, 0xee, 0xaa, 0xba, 0x9e, 0xae, 0x64, 0xa3, 0x0e, 0x39, 0x1a, 0xfb, 0x40, 0xd8, 0x04, 0x65],
        [0xc4, 0x90, 0x28, 0x86, 0x7d, 0xf2, 0x6a, 0xcf, 0x24, 0x22, 0xcc, 0x06, 0xd6, 0xdc, 0x62, 0x01, 0x6c, 0x37, 0x17, 0x4f, 0xc0, 0x86, 0x2e, 0xdd, 0x75, 0xef, 0x6f, 0x88, 0x63, 0x11, 0x0d, 0x57],
        [0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    ],
    [
        [0xd7, 0x91, 0xba, 0x8c, 0x97, 0xc3, 0xf1, 0x35, 0x2c, 0x55, 0xf8, 0x11, 0xd2, 0xaa, 0x06, 0xeb, 0x07, 0x03, 0x1d, 0xd5, 0x77, 0x80, 0xa1, 0x01, 0xa1, 0x5c, 0x4c, 0x43, 0xbd, 0x9e, 0x6a, 0x65],
        [0x3b, 0xf7, 0xcb, 0x04, 0x44, 0xd9, 0xdf, 0x55, 0xab, 0xcc, 0xff, 0x85, 0xac, 0xa0, 0xb3, 0xe5, 0x09, 0xa0, 0x93, 0xcd, 0x4d, 0x9d, 0xb2, 0xf6, 0x9f, 0x63, 0xbc, 0xda, 0x98, 0x16, 0xf4, 0x4d],
        [0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    ],
    [
        [0xb1, 0x03, 0x6e, 0xc1, 0xa7, 0x71, 0x16, 0x50, 0x2e, 0x20, 0xb4, 0xf8, 0x9b, 0xc6, 0x45, 0x24, 0xb2, 0x63, 0x08, 0x9d, 0x9e, 0x54, 0x35, 0xc9, 0x19, 0x41, 0x36, 0x29, 0x62, 0xc3, 0x2b, 0x04],
        [0x77, 0xfa, 0xf1, 0x8d, 0x8c, 0x9c, 0x6d, 0x68, 0xa9, 0x7c, 0x18, 0xca, 0x2f, 0xc5, 0x7f, 0xb7, 0xbf, 0x24, 0xed, 0xda, 0xc1, 0x94, 0x98, 0x84, 0x9d, 0x91, 0x54, 0x1b, 0x4c, 0xce, 0x59, 0x0e],
        [0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    ],
    [
        [0xbd, 0x34, 0x10, 0xfc, 0x53, 0xa1, 0xee, 0x96, 0x9e, 0x6a, 0x21, 0x36, 0x03, 0xe9, 0x18, 0x59, 0xb2, 0x34, 0xe7, 0x30, 0x17, 0x11, 0xf8, 0x1b, 0x0d, 0x71, 0xe0, 0xea, 0x4d, 0xb5, 0xd8, 0x6b],
        [0x17, 0xf7, 0x7b, 0xb2, 0x11, 0x68, 0xf9, 0x2f, 0x0e, 0x63, 0x81, 0x71, 0x2e, 0x4d, 0x17, 0xef, 0x4d, 0x80, 0x97, 0x58, 0x19, 0x07, 0xb0, 0x49, 0xd4, 0x1a, 0xe1, 0x50, 0xf9, 0xc3, 0xa1, 0x2f],
        [0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    ],
];

pub const ECFFT_FQ_ISO_DEN: [[[u8; 32]; 2]; 7] = [
    [
        [0x0e, 0x99, 0x04, 0xa0, 0xcd, 0xfe, 0x01, 0x6e, 0xfd, 0xd7, 0xda, 0x84, 0x4e, 0x65, 0x8c, 0x8e, 0x23, 0x4b, 0xb4, 0x35, 0x9e, 0xc8, 0x81, 0xe9, 0xdd, 0xbb, 0xc9, 0x40, 0x16, 0x00, 0xa8, 0x3e],
        [0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    ],
    [
        [0xa7, 0xb7, 0x7a, 0x27, 0x2f, 0x46, 0x0a, 0x47, 0x35, 0x07, 0x44, 0x03, 0x5d, 0x88, 0x41, 0x2f, 0x3c, 0xff, 0x10, 0x16, 0x54, 0x4a, 0x2b, 0x43, 0x6f, 0xed, 0xf1, 0xb4, 0x04, 0xa2, 0x80, 0x7c],
        [0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    ],
    [
        [0xac, 0x70, 0xc3, 0x28, 0x8e, 0xce, 0x7d, 0x5c, 0x8f, 0xfd, 0xe4, 0x15, 0x0f, 0xef, 0xc2, 0xa3, 0xca, 0x25, 0xe5, 0xaa, 0xe7, 0x10, 0x01, 0x41, 0x39, 0x0a, 0xd1, 0x05, 0xa8, 0x6a, 0x19, 0x39],
        [0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    ],
    [
        [0x1f, 0x88, 0xbe, 0xb4, 0xa9, 0xab, 0x97, 0x9e, 0x0e, 0xbb, 0xe7, 0x49, 0x04, 0xf0, 0xcc, 0xdd, 0xe9, 0x89, 0x3e, 0x8e, 0xb5, 0x29, 0xfd, 0xa2, 0x86, 0x58, 0x2a, 0x31, 0xce, 0x91, 0x14, 0x16],
        [0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    ],
    [
        [0x54, 0x6c, 0x68, 0x90, 0xc9, 0xae, 0xca, 0x6a, 0x6b, 0xf7, 0x92, 0x60, 0x18, 0xb8, 0x8d, 0xed, 0x15, 0xcf, 0x9a, 0xf8, 0xc8, 0x24, 0xc5, 0x3b, 0xd0, 0x77, 0xc1, 0xa0, 0xa8, 0x37, 0xc3, 0x6a],
        [0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    ],
    [
        [0x78, 0x84, 0xfb, 0xd6, 0xf7, 0x42, 0xc6, 0xbe, 0x2b, 0xe6, 0xbd, 0x09, 0x80, 0x75, 0xda, 0xe8, 0x31, 0x62, 0xd4, 0x7a, 0x75, 0x9f, 0xf2, 0x4e, 0xbf, 0x60, 0x32, 0xfc, 0xc7, 0x0c, 0x5d, 0x26],
        [0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    ],
    [
        [0xd3, 0x77, 0x2f, 0x54, 0x3e, 0x25, 0xe7, 0xdc, 0xb1, 0x65, 0x3f, 0xd9, 0x5d, 0xb8, 0x76, 0xc1, 0xfb, 0x6c, 0xee, 0x44, 0x35, 0x9c, 0xb7, 0xdc, 0x0c, 0x3a, 0x02, 0x32, 0xb3, 0x14, 0x22, 0x1e],
        [0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    ],
];
