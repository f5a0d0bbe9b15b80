//! Fixed `.gitignore` for the generated Go project.

const GITIGNORE: &str = r#"# Binaries for programs and plugins
*.exe
*.exe~
*.dll
*.so
*.dylib

# Test binary, built with 'go test -c'
*.test

# Output of the go coverage tool
*.out

# Dependency directories (e.g., vendor)
vendor/

# Go workspace file
go.work
go.work.sum

# Environment variables file
.env

# IDE / Editor specific
.vscode/
.idea/
*.swp
*~
"#;

pub fn render_gitignore() -> String {
    GITIGNORE.to_string()
}
