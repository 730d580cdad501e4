//! Fixed site assets: default markup and stylesheet

/// Built-in sample document, used when the caller supplies no markup.
///
/// Contains one button per demonstrated method so a bare run still produces
/// routes.
pub const DEFAULT_MARKUP: &str = r#"<!DOCTYPE html>
<html>
<head>
    <link rel="stylesheet" type="text/css" href="styles.css">
</head>
<body>

<button hx-get="/get_example">GET example</button>
<button hx-post="/post_example">POST example</button>

</body>
</html>
"#;

/// Stylesheet written alongside every scaffold.
pub const STYLESHEET: &str = r"body {
    background-color: linen;
}

button {
    background-color: blue;
    color: white;
    border: none;
    padding: 15px 32px;
    text-align: center;
    text-decoration: none;
    display: inline-block;
    font-size: 16px;
    margin: 4px 2px;
    cursor: pointer;
}
";
