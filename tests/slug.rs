use hermes::slug::{normalize, slug_from_path};

#[test]
fn normalize_strips_directories_and_extension() {
    assert_eq!(normalize("a/b/my-post.md"), "my-post");
    assert_eq!(normalize("my-post.md"), "my-post");
    assert_eq!(normalize("my-post"), "my-post");
}

#[test]
fn normalize_is_idempotent() {
    assert_eq!(normalize(&normalize("a/b/my-post.md")), "my-post");
}

#[test]
fn normalize_strips_only_the_final_extension() {
    assert_eq!(normalize("archive.tar.gz"), "archive.tar");
}

#[test]
fn normalize_keeps_case() {
    // lowercasing belongs to publish-time slugification only
    assert_eq!(normalize("My-Post.md"), "My-Post");
}

#[test]
fn normalize_degenerate_inputs_yield_empty() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("/"), "");
    assert_eq!(normalize(".."), "");
}

#[test]
fn normalize_keeps_dotfile_names() {
    assert_eq!(normalize(".env"), ".env");
}

#[test]
fn filename_derived_slug_is_lowercased_and_hyphenated() {
    assert_eq!(slug_from_path("My Post.md"), "my-post");
    assert_eq!(slug_from_path("posts/Hello, World!.md"), "hello-world");
    assert_eq!(slug_from_path("already-good.md"), "already-good");
}

#[test]
fn slug_from_degenerate_path_is_empty() {
    assert_eq!(slug_from_path(""), "");
    assert_eq!(slug_from_path("/"), "");
}
