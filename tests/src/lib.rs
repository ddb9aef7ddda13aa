//! Cross-crate tests for `pingsheet`: real workbooks on disk, mock probers
//! in front of the dispatcher.
