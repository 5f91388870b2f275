// Generated by `epochcurve tables`. Do not edit by hand.

use super::{ExpHiTerm, ExpLoTerm, LogHiTerm, LogLoTerm, U256};

pub const EXP_HI_TERMS: [ExpHiTerm; 7] = [
    ExpHiTerm {
        bit: U256([0x0000000000000000, 0x0400000000000000, 0x0000000000000000, 0x0000000000000000]),
        num: U256([0xf58934f97aea5816, 0x0f5a893b608861e1, 0x0000000000000007, 0x0000000000000000]),
        den: U256([0x0ae5e4eb1b479e04, 0x3afbe7ab2082ba1a, 0x0000000000000006, 0x0000000000000000]),
    },
    ExpHiTerm {
        bit: U256([0x0000000000000000, 0x0800000000000000, 0x0000000000000000, 0x0000000000000000]),
        num: U256([0x0ae5e4eb1b479e11, 0x3afbe7ab2082ba1a, 0x0000000000000006, 0x0000000000000000]),
        den: U256([0xb3ad1aa9866ebb76, 0xda2cbf1be5827f9e, 0x0000000000000004, 0x0000000000000000]),
    },
    ExpHiTerm {
        bit: U256([0x0000000000000000, 0x1000000000000000, 0x0000000000000000, 0x0000000000000000]),
        num: U256([0xb3ad1aa9866ebb8b, 0xda2cbf1be5827f9e, 0x0000000000000004, 0x0000000000000000]),
        den: U256([0xd6f63c1482a7c89d, 0xf16ac6c59de6f8d5, 0x0000000000000002, 0x0000000000000000]),
    },
    ExpHiTerm {
        bit: U256([0x0000000000000000, 0x2000000000000000, 0x0000000000000000, 0x0000000000000000]),
        num: U256([0xd6f63c1482a7c8a1, 0xf16ac6c59de6f8d5, 0x0000000000000002, 0x0000000000000000]),
        den: U256([0xb76eae12d0295732, 0x152aaa3bf81cb9fd, 0x0000000000000001, 0x0000000000000000]),
    },
    ExpHiTerm {
        bit: U256([0x0000000000000000, 0x4000000000000000, 0x0000000000000000, 0x0000000000000000]),
        num: U256([0xb76eae12d029572c, 0x152aaa3bf81cb9fd, 0x0000000000000001, 0x0000000000000000]),
        den: U256([0xd15e0265855c47ab, 0x2582ab704279e8ef, 0x0000000000000000, 0x0000000000000000]),
    },
    ExpHiTerm {
        bit: U256([0x0000000000000000, 0x8000000000000000, 0x0000000000000000, 0x0000000000000000]),
        num: U256([0xd15e0265855c4792, 0x2582ab704279e8ef, 0x0000000000000000, 0x0000000000000000]),
        den: U256([0xdfe6a33c07f738f5, 0x00afe10820813d65, 0x0000000000000000, 0x0000000000000000]),
    },
    ExpHiTerm {
        bit: U256([0x0000000000000000, 0x0000000000000000, 0x0000000000000001, 0x0000000000000000]),
        num: U256([0xdfe6a33c07f72f0c, 0x00afe10820813d65, 0x0000000000000000, 0x0000000000000000]),
        den: U256([0xe56d32fb9f997447, 0x00000f1aaddd7742, 0x0000000000000000, 0x0000000000000000]),
    },
];

pub const EXP_LO_TERMS: [ExpLoTerm; 20] = [
    ExpLoTerm { val: U256([0x21c3677c82b40000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), ind: 1 },
    ExpLoTerm { val: U256([0x10e1b3be415a0000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), ind: 2 },
    ExpLoTerm { val: U256([0x05a0913f6b1e0000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), ind: 3 },
    ExpLoTerm { val: U256([0x0168244fdac78000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), ind: 4 },
    ExpLoTerm { val: U256([0x004807432bc18000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), ind: 5 },
    ExpLoTerm { val: U256([0x000c0135dca04000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), ind: 6 },
    ExpLoTerm { val: U256([0x0001b707b1cdc000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), ind: 7 },
    ExpLoTerm { val: U256([0x000036e0f639b800, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), ind: 8 },
    ExpLoTerm { val: U256([0x00000618fee9f800, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), ind: 9 },
    ExpLoTerm { val: U256([0x0000009c197dcc00, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), ind: 10 },
    ExpLoTerm { val: U256([0x0000000e30dce400, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), ind: 11 },
    ExpLoTerm { val: U256([0x000000012ebd1300, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), ind: 12 },
    ExpLoTerm { val: U256([0x0000000017499f00, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), ind: 13 },
    ExpLoTerm { val: U256([0x0000000001a9d480, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), ind: 14 },
    ExpLoTerm { val: U256([0x00000000001c6380, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), ind: 15 },
    ExpLoTerm { val: U256([0x000000000001c638, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), ind: 16 },
    ExpLoTerm { val: U256([0x0000000000001ab8, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), ind: 17 },
    ExpLoTerm { val: U256([0x000000000000017c, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), ind: 18 },
    ExpLoTerm { val: U256([0x0000000000000014, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), ind: 19 },
    ExpLoTerm { val: U256([0x0000000000000001, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), ind: 20 },
];

pub const LOG_HI_TERMS: [LogHiTerm; 10] = [
    LogHiTerm {
        val: U256([0x0000000000000000, 0x6000000000000000, 0x0000000000000000, 0x0000000000000000]),
        exp: U256([0x97bf8a6e89874720, 0x82bcb7edf620be5a, 0x0000000000000002, 0x0000000000000000]),
    },
    LogHiTerm {
        val: U256([0x0000000000000000, 0x3000000000000000, 0x0000000000000000, 0x0000000000000000]),
        exp: U256([0xdc8cb1a87d3bc87a, 0x8f69ff327e2a0abe, 0x0000000000000000, 0x0000000000000000]),
    },
    LogHiTerm {
        val: U256([0x0000000000000000, 0x1800000000000000, 0x0000000000000000, 0x0000000000000000]),
        exp: U256([0x30d5bb8fb9dc43e4, 0x43be76d19f73def5, 0x0000000000000000, 0x0000000000000000]),
    },
    LogHiTerm {
        val: U256([0x0000000000000000, 0x0c00000000000000, 0x0000000000000000, 0x0000000000000000]),
        exp: U256([0x68f16cb3612480b8, 0x2e8f4a27b7ded4c4, 0x0000000000000000, 0x0000000000000000]),
    },
    LogHiTerm {
        val: U256([0x0000000000000000, 0x0600000000000000, 0x0000000000000000, 0x0000000000000000]),
        exp: U256([0x9c189196f8cc9268, 0x2699702e16b06a5a, 0x0000000000000000, 0x0000000000000000]),
    },
    LogHiTerm {
        val: U256([0x0000000000000000, 0x0300000000000000, 0x0000000000000000, 0x0000000000000000]),
        exp: U256([0x27a319b7501d5785, 0x232526e0e9c19ad1, 0x0000000000000000, 0x0000000000000000]),
    },
    LogHiTerm {
        val: U256([0x0000000000000000, 0x0180000000000000, 0x0000000000000000, 0x0000000000000000]),
        exp: U256([0x259fcc7ac9652bd4, 0x2189246d053d1785, 0x0000000000000000, 0x0000000000000000]),
    },
    LogHiTerm {
        val: U256([0x0000000000000000, 0x00c0000000000000, 0x0000000000000000, 0x0000000000000000]),
        exp: U256([0xcacb3aebd2b6edc3, 0x20c24486c821ba29, 0x0000000000000000, 0x0000000000000000]),
    },
    LogHiTerm {
        val: U256([0x0000000000000000, 0x0060000000000000, 0x0000000000000000, 0x0000000000000000]),
        exp: U256([0x1b2823439dced945, 0x206090906c40ed41, 0x0000000000000000, 0x0000000000000000]),
    },
    LogHiTerm {
        val: U256([0x0000000000000000, 0x0030000000000000, 0x0000000000000000, 0x0000000000000000]),
        exp: U256([0x1bcab23d632c0b35, 0x2030241206c206e8, 0x0000000000000000, 0x0000000000000000]),
    },
];

pub const LOG_LO_TERMS: [LogLoTerm; 8] = [
    LogLoTerm {
        num: U256([0x0000000000000000, 0x4000000000000000, 0x0000000000000000, 0x0000000000000000]),
        den: U256([0x0000000000000000, 0x4000000000000000, 0x0000000000000000, 0x0000000000000000]),
    },
    LogLoTerm {
        num: U256([0xaaaaaaaaaaaaaaaa, 0x2aaaaaaaaaaaaaaa, 0x0000000000000000, 0x0000000000000000]),
        den: U256([0x0000000000000000, 0x8000000000000000, 0x0000000000000000, 0x0000000000000000]),
    },
    LogLoTerm {
        num: U256([0x6666666666666666, 0x2666666666666666, 0x0000000000000000, 0x0000000000000000]),
        den: U256([0x0000000000000000, 0xc000000000000000, 0x0000000000000000, 0x0000000000000000]),
    },
    LogLoTerm {
        num: U256([0x4924924924924924, 0x2492492492492492, 0x0000000000000000, 0x0000000000000000]),
        den: U256([0x0000000000000000, 0x0000000000000000, 0x0000000000000001, 0x0000000000000000]),
    },
    LogLoTerm {
        num: U256([0x38e38e38e38e38e3, 0x238e38e38e38e38e, 0x0000000000000000, 0x0000000000000000]),
        den: U256([0x0000000000000000, 0x4000000000000000, 0x0000000000000001, 0x0000000000000000]),
    },
    LogLoTerm {
        num: U256([0x2e8ba2e8ba2e8ba2, 0x22e8ba2e8ba2e8ba, 0x0000000000000000, 0x0000000000000000]),
        den: U256([0x0000000000000000, 0x8000000000000000, 0x0000000000000001, 0x0000000000000000]),
    },
    LogLoTerm {
        num: U256([0x2762762762762762, 0x2276276276276276, 0x0000000000000000, 0x0000000000000000]),
        den: U256([0x0000000000000000, 0xc000000000000000, 0x0000000000000001, 0x0000000000000000]),
    },
    LogLoTerm {
        num: U256([0x2222222222222222, 0x2222222222222222, 0x0000000000000000, 0x0000000000000000]),
        den: U256([0x0000000000000000, 0x0000000000000000, 0x0000000000000002, 0x0000000000000000]),
    },
];
