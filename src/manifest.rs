//! The static description of everything a scaffold run produces.
//!
//! The manifest is a design-time table, not data discovered at runtime: each
//! entry is a destination-relative path plus either nothing (directories) or
//! a content generator taking the derived module name (files).

/// A directory created under the project root before any file is written.
#[derive(Debug, Clone, Copy)]
pub struct DirectorySpec {
    pub path: &'static str,
    pub mode: u32,
}

/// One generated file: destination-relative path, permission bits, and a
/// content generator taking the derived module name.
#[derive(Debug, Clone, Copy)]
pub struct FileSpec {
    pub path: &'static str,
    pub mode: u32,
    pub content: fn(&str) -> String,
}

/// The ordered set of directories and files a scaffold run materializes.
///
/// Directories are created first, then files in sequence, so a later entry
/// may rely on an earlier one existing.
#[derive(Debug, Clone)]
pub struct Manifest {
    pub directories: Vec<DirectorySpec>,
    pub files: Vec<FileSpec>,
}

const DIR_MODE: u32 = 0o755;
const FILE_MODE: u32 = 0o644;

impl Manifest {
    /// The bare layout: `cmd/`, `pkg/`, ignore rules and a plain build
    /// recipe. Content is byte-for-byte the plain variant's, not the
    /// enriched templates of [`Manifest::full`].
    pub fn minimal() -> Self {
        Self {
            directories: vec![
                DirectorySpec {
                    path: "cmd",
                    mode: DIR_MODE,
                },
                DirectorySpec {
                    path: "pkg",
                    mode: DIR_MODE,
                },
            ],
            files: vec![
                FileSpec {
                    path: ".gitignore",
                    mode: FILE_MODE,
                    content: gitignore_minimal,
                },
                FileSpec {
                    path: "Makefile",
                    mode: FILE_MODE,
                    content: makefile_minimal,
                },
            ],
        }
    }

    /// The same layout with enriched ignore rules and build recipe, plus
    /// README, container recipes and an entry point.
    pub fn full() -> Self {
        Self {
            directories: vec![
                DirectorySpec {
                    path: "cmd",
                    mode: DIR_MODE,
                },
                DirectorySpec {
                    path: "pkg",
                    mode: DIR_MODE,
                },
            ],
            files: vec![
                FileSpec {
                    path: ".gitignore",
                    mode: FILE_MODE,
                    content: gitignore,
                },
                FileSpec {
                    path: "Makefile",
                    mode: FILE_MODE,
                    content: makefile,
                },
                FileSpec {
                    path: "README.md",
                    mode: FILE_MODE,
                    content: readme,
                },
                FileSpec {
                    path: "Dockerfile",
                    mode: FILE_MODE,
                    content: dockerfile,
                },
                FileSpec {
                    path: ".dockerignore",
                    mode: FILE_MODE,
                    content: dockerignore,
                },
                FileSpec {
                    path: "cmd/main.go",
                    mode: FILE_MODE,
                    content: entry_point,
                },
            ],
        }
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self::full()
    }
}

fn gitignore_minimal(_module: &str) -> String {
    "*.log\n\
     *.swp\n\
     *~\n\
     *.out\n\
     *.exe\n\
     *.test\n\
     vendor/\n"
        .to_string()
}

fn makefile_minimal(_module: &str) -> String {
    ".PHONY: build\n\
     \n\
     build:\n\
     \tgo build -o bin/ ./cmd/...\n"
        .to_string()
}

fn gitignore(_module: &str) -> String {
    "*.log\n\
     *.swp\n\
     *~\n\
     *.out\n\
     *.exe\n\
     *.test\n\
     bin/\n\
     vendor/\n"
        .to_string()
}

fn readme(module: &str) -> String {
    format!("# {}\n", module)
}

// BINARY and IMAGE are computed by make itself so the recipe keeps working
// if the project directory is later renamed.
fn makefile(_module: &str) -> String {
    "BINARY := $(notdir $(CURDIR))\n\
     IMAGE := $(BINARY)\n\
     \n\
     .PHONY: build\n\
     build:\n\
     \tgo build -o bin/$(BINARY) ./cmd/...\n\
     \n\
     .PHONY: image\n\
     image:\n\
     \tdocker build -t $(IMAGE) .\n\
     \n\
     .PHONY: clean\n\
     clean:\n\
     \trm -rf bin/\n"
        .to_string()
}

fn dockerfile(_module: &str) -> String {
    "FROM golang:1.22-alpine AS build\n\
     WORKDIR /src\n\
     COPY . .\n\
     RUN CGO_ENABLED=0 go build -ldflags \"-s -w\" -o /out/app ./cmd/...\n\
     \n\
     FROM alpine:3.20\n\
     COPY --from=build /out/app /usr/local/bin/app\n\
     EXPOSE 8080\n\
     CMD [\"app\"]\n"
        .to_string()
}

fn dockerignore(_module: &str) -> String {
    ".git\n\
     bin/\n\
     vendor/\n\
     *.log\n\
     Dockerfile\n\
     .dockerignore\n"
        .to_string()
}

fn entry_point(_module: &str) -> String {
    "package main\n\
     \n\
     import \"fmt\"\n\
     \n\
     func main() {\n\
     \tfmt.Println(\"Hello, world!\")\n\
     }\n"
        .to_string()
}
