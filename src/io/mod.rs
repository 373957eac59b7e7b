/*! Reading and writing facilities

- [reader]: loads the corpus into an in-memory line sequence, handling gzip
  and the legacy TIS-620 encoding, and dropping comment lines.
- [writer]: writes gold records to a timestamped output file.
!*/
pub mod reader;
pub mod writer;
