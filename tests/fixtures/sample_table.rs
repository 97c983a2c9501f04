// Code generated by mimedesc-gen; DO NOT EDIT.
// This file was generated on 2026-10-19T08:30:00Z

/// MIME types mapped to their human-friendly descriptions.
/// Sourced from the freedesktop.org shared-mime-info database.
pub(crate) static MIME_DESCRIPTIONS: phf::Map<&'static str, &'static str> = ::phf::phf_map! {
    "application/pdf" => "PDF document",
    "application/x-quoted" => "He said \"hi\"\\now",
    "image/x-amp" => "Tom & Jerry <cartoon>",
    "text/plain" => "Plain text document",
    "text/x-duplicate" => "Second description",
    "text/x-special" => "tab\tcrlf\r\n{brace} it's /* not a comment */",
};
