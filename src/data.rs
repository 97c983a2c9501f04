// Code generated by mimedesc-gen; DO NOT EDIT.
// This file was generated on 2026-10-19T08:30:00Z

/// MIME types mapped to their human-friendly descriptions.
/// Sourced from the freedesktop.org shared-mime-info database.
pub(crate) static MIME_DESCRIPTIONS: phf::Map<&'static str, &'static str> = ::phf::phf_map! {
    "application/gzip" => "Gzip archive",
    "application/json" => "JSON document",
    "application/msword" => "Word document",
    "application/octet-stream" => "unknown",
    "application/pdf" => "PDF document",
    "application/postscript" => "PS document",
    "application/rtf" => "RTF document",
    "application/vnd.ms-excel" => "Excel spreadsheet",
    "application/vnd.ms-powerpoint" => "PowerPoint presentation",
    "application/vnd.oasis.opendocument.presentation" => "ODP presentation",
    "application/vnd.oasis.opendocument.spreadsheet" => "ODS spreadsheet",
    "application/vnd.oasis.opendocument.text" => "ODT document",
    "application/vnd.openxmlformats-officedocument.presentationml.presentation" => "PowerPoint 2007 presentation",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => "Excel 2007 spreadsheet",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => "Word 2007 document",
    "application/x-7z-compressed" => "7-zip archive",
    "application/x-bzip2" => "Bzip2 archive",
    "application/x-executable" => "executable",
    "application/x-iso9660-image" => "raw CD image",
    "application/x-sharedlib" => "shared library",
    "application/x-shellscript" => "shell script",
    "application/x-tar" => "Tar archive",
    "application/x-xz" => "XZ archive",
    "application/xml" => "XML document",
    "application/zip" => "Zip archive",
    "application/zstd" => "Zstandard archive",
    "audio/flac" => "FLAC audio",
    "audio/mpeg" => "MP3 audio",
    "audio/ogg" => "Ogg Audio",
    "font/otf" => "OpenType font",
    "font/ttf" => "TrueType font",
    "image/bmp" => "Windows BMP image",
    "image/gif" => "GIF image",
    "image/jpeg" => "JPEG image",
    "image/png" => "PNG image",
    "image/svg+xml" => "SVG image",
    "image/tiff" => "TIFF image",
    "image/vnd.microsoft.icon" => "Windows icon",
    "image/webp" => "WebP image",
    "inode/directory" => "folder",
    "text/calendar" => "VCS/ICS calendar",
    "text/css" => "CSS stylesheet",
    "text/csv" => "CSV document",
    "text/html" => "HTML document",
    "text/javascript" => "JavaScript program",
    "text/markdown" => "Markdown document",
    "text/plain" => "Plain text document",
    "text/rust" => "Rust source code",
    "text/x-c++src" => "C++ source code",
    "text/x-csrc" => "C source code",
    "text/x-go" => "Go source code",
    "text/x-python" => "Python script",
    "text/x-tex" => "TeX document",
    "video/mp4" => "MPEG-4 video",
    "video/webm" => "WebM video",
    "video/x-matroska" => "Matroska video",
};
