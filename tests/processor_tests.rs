//! Library-level tests for the processor: banner replacement, tag-region
//! injection, passthrough, and the fatal-failure contract.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use renotice::processor::{Processor, expand_patterns};
use renotice::tags::TagPair;
use renotice::templates::{NoticeContext, NoticeTemplate};
use tempfile::{TempDir, tempdir};

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn simple_processor(notice: &str) -> Processor {
    Processor::new(
        NoticeTemplate::new(notice),
        NoticeContext::new(),
        TagPair::new("<!-- start -->", "<!-- end -->"),
    )
}

#[test]
fn test_banner_js_scenario() -> Result<()> {
    // The canonical case: one old block banner at column one.
    let dir = tempdir()?;
    let file = write_file(&dir, "banner.js", "/* Copyright 2019 Example Co. */\nfunction f(){}\n");

    simple_processor("// NOTICE v2").process(&[file.clone()])?;

    assert_eq!(fs::read_to_string(&file)?, "// NOTICE v2\nfunction f(){}\n");
    Ok(())
}

#[test]
fn test_tpl_html_scenario() -> Result<()> {
    let dir = tempdir()?;
    let file = write_file(
        &dir,
        "tpl.html",
        "<div>\n  <!-- start -->\nOLD\n  <!-- end -->\n</div>",
    );

    simple_processor("// Copyright Example").process(&[file.clone()])?;

    assert_eq!(
        fs::read_to_string(&file)?,
        "<div>\n  <!-- start -->\n  Copyright Example\n  <!-- end -->\n</div>"
    );
    Ok(())
}

#[test]
fn test_idempotence() -> Result<()> {
    let dir = tempdir()?;
    let file = write_file(
        &dir,
        "app.js",
        "// Copyright 2020 Old Co.\n// All rights reserved.\nconsole.log('hi');\n",
    );

    let processor = simple_processor("// Copyright (c) 2026 Example Co.");
    processor.process(&[file.clone()])?;
    let first = fs::read_to_string(&file)?;
    processor.process(&[file.clone()])?;
    let second = fs::read_to_string(&file)?;

    assert_eq!(first, second);
    assert_eq!(first.matches("Example Co.").count(), 1);
    assert!(!first.contains("Old Co."));
    Ok(())
}

#[test]
fn test_idempotence_markup() -> Result<()> {
    let dir = tempdir()?;
    let file = write_file(
        &dir,
        "page.html",
        "<html>\n<body>\n    <!-- start -->\nstale\n    <!-- end -->\n</body>\n</html>",
    );

    let processor = simple_processor("// Copyright (c) 2026 Example Co.");
    processor.process(&[file.clone()])?;
    let first = fs::read_to_string(&file)?;
    processor.process(&[file.clone()])?;
    let second = fs::read_to_string(&file)?;

    assert_eq!(first, second);
    assert!(first.contains("    <!-- start -->\n    Copyright (c) 2026 Example Co.\n    <!-- end -->"));
    Ok(())
}

#[test]
fn test_all_banners_removed_mixed_styles() -> Result<()> {
    let dir = tempdir()?;
    let file = write_file(
        &dir,
        "mixed.js",
        "/* Copyright 2018 First Co. */\nfunction a(){}\n// Copyright 2019 Second Co.\n// later banner\nfunction b(){}\n",
    );

    simple_processor("// NOTICE").process(&[file.clone()])?;

    let content = fs::read_to_string(&file)?;
    assert_eq!(content.matches("// NOTICE").count(), 1);
    assert!(!content.contains("First Co."));
    assert!(!content.contains("Second Co."));
    assert!(!content.contains('\u{FFFD}'));
    assert!(content.contains("function a(){}"));
    assert!(content.contains("function b(){}"));
    Ok(())
}

#[test]
fn test_indented_comment_untouched() -> Result<()> {
    let dir = tempdir()?;
    let source = "function f() {\n    /* Copyright 2020 Inline Co. */\n    return 1;\n}\n";
    let file = write_file(&dir, "inline.js", source);

    simple_processor("// NOTICE").process(&[file.clone()])?;

    let content = fs::read_to_string(&file)?;
    // The new notice is prepended; the indented comment stays where it was.
    assert!(content.starts_with("// NOTICE\n"));
    assert!(content.contains("    /* Copyright 2020 Inline Co. */"));
    Ok(())
}

#[test]
fn test_no_banner_prepends() -> Result<()> {
    let dir = tempdir()?;
    let file = write_file(&dir, "fresh.js", "export default 1;\n");

    simple_processor("// NOTICE").process(&[file.clone()])?;

    assert_eq!(fs::read_to_string(&file)?, "// NOTICE\nexport default 1;\n");
    Ok(())
}

#[test]
fn test_passthrough_byte_identical() -> Result<()> {
    let dir = tempdir()?;
    let original = "/* Copyright 2019 Example */\nbody { margin: 0; }\n";
    let file = write_file(&dir, "style.css", original);

    simple_processor("// NOTICE").process(&[file.clone()])?;

    assert_eq!(fs::read_to_string(&file)?, original);
    Ok(())
}

#[test]
fn test_misordered_tags_fatal() {
    let dir = tempdir().unwrap();
    let file = write_file(&dir, "bad.html", "<!-- end -->\ncontent\n<!-- start -->\n");

    let err = simple_processor("// N").process(&[file.clone()]).unwrap_err();
    assert!(err.to_string().contains("invalid template tags"));
    assert!(err.to_string().contains("bad.html"));
    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "<!-- end -->\ncontent\n<!-- start -->\n"
    );
}

#[test]
fn test_missing_close_tag_fatal() {
    let dir = tempdir().unwrap();
    let file = write_file(&dir, "open_only.html", "<!-- start -->\ncontent\n");

    assert!(simple_processor("// N").process(&[file]).is_err());
}

#[test]
fn test_path_variable_rendered_in_markup() -> Result<()> {
    let dir = tempdir()?;
    let file = write_file(&dir, "index.html", "<!-- start -->\nx\n<!-- end -->\n");

    simple_processor("// Generated for {{path}}").process(&[file.clone()])?;

    let content = fs::read_to_string(&file)?;
    assert!(content.contains("Generated for"));
    assert!(content.contains("index.html"));
    Ok(())
}

#[test]
fn test_markup_strips_comment_tokens() -> Result<()> {
    let dir = tempdir()?;
    let file = write_file(&dir, "page.html", "<!-- start -->\nx\n<!-- end -->\n");

    let notice = "// =====\n//\n// Copyright 2026 Example\n//\n// =====";
    simple_processor(notice).process(&[file.clone()])?;

    let content = fs::read_to_string(&file)?;
    assert!(!content.contains("//"));
    assert!(content.contains("Copyright 2026 Example"));
    Ok(())
}

#[test]
fn test_expand_patterns_with_processor() -> Result<()> {
    let dir = tempdir()?;
    write_file(&dir, "a.js", "one();\n");
    write_file(&dir, "b.js", "two();\n");
    write_file(&dir, "c.txt", "notes\n");

    let files = expand_patterns(&[dir.path().to_string_lossy().into_owned()])?;
    assert_eq!(files.len(), 3);

    let processed = simple_processor("// NOTICE").process(&files)?;
    assert_eq!(processed, 3);

    assert!(fs::read_to_string(dir.path().join("a.js"))?.starts_with("// NOTICE\n"));
    assert!(fs::read_to_string(dir.path().join("b.js"))?.starts_with("// NOTICE\n"));
    assert_eq!(fs::read_to_string(dir.path().join("c.txt"))?, "notes\n");
    Ok(())
}
