//! Known manifest entries
//!
//! The allow-list enumerates every entry the tool understands, in the
//! order roll-all processes them. The deny-list marks entries with no
//! rollable upstream equivalent.

/// Every rollable entry, in roll-all processing order.
pub const ALL_ENTRIES: &[&str] = &[
    "abseil_revision",
    "android_toolchain_version",
    "build_revision",
    "buildtools_revision",
    "clang_format_revision",
    "clang_revision",
    "cpu_features_revision",
    "dragonbox_revision",
    "fast_float_revision",
    "fp16_revision",
    "freetype_revision",
    "gn_version",
    "gtest_revision",
    "highway_revision",
    "icu_revision",
    "jpeg_turbo_revision",
    "libcxx_revision",
    "libcxxabi_revision",
    "libunwind_revision",
    "llvm_libc_revision",
    "nasm_source_revision",
    "ninja_version",
    "partition_allocator_revision",
    "reclient_version",
    "result_adapter_revision",
    "rust_revision",
    "siso_version",
    "skia_revision",
    "testing_rust_revision",
    "tools_rust_revision",
    "tools_win_revision",
    "v8_revision",
];

/// Entries known to have no rollable equivalent.
pub const UNSUPPORTED_ENTRIES: &[&str] = &["pdfium_tests_revision", "test_fonts_revision"];

/// The entry whose roll goes through a bespoke external script.
pub const FREETYPE_ENTRY: &str = "freetype_revision";

/// Whether the entry is on the deny-list.
pub fn is_unsupported(entry: &str) -> bool {
    UNSUPPORTED_ENTRIES.contains(&entry)
}
