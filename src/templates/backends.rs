//! Backend source templates
//!
//! Each backend is three named constants: a fixed preamble, a per-route
//! handler template (handlebars), and a fixed trailer. Renderers compose
//! them in that order.

/// Flask application preamble
pub const FLASK_PREAMBLE: &str = r#"from flask import Flask, request, render_template
app = Flask(__name__)
"#;

/// Flask handler, one per route
pub const FLASK_HANDLER: &str = r#"

@app.route('{{path}}', methods=['{{method}}'])
def {{handler_name}}():
    # Handle {{method}} request here
    return "{{ack}}"
"#;

/// Flask trailer: static-file route and startup invocation
pub const FLASK_TRAILER: &str = r#"

@app.route('/static/<path:filename>')
def staticfiles(filename):
    return app.send_static_file(filename)

if __name__ == '__main__':
    app.run(debug=True)
"#;

/// Gin application preamble
pub const GIN_PREAMBLE: &str = "package main

import (
\t\"github.com/gin-gonic/gin\"
)

func main() {
\tr := gin.Default()
";

/// Gin handler, one per route
pub const GIN_HANDLER: &str = "
\tr.{{method}}(\"{{path}}\", func(c *gin.Context) {
\t\tc.String(200, \"{{ack}}\")
\t})
";

/// Gin trailer: framework run call
pub const GIN_TRAILER: &str = "
\tr.Run() // listen and serve on 0.0.0.0:8080
}
";

/// Slim PHP application preamble
pub const SLIM_PHP_PREAMBLE: &str = r"<?php
require 'vendor/autoload.php';

$app = new \Slim\App;
";

/// Slim PHP handler, one per route
pub const SLIM_PHP_HANDLER: &str = r"
$app->{{method_lower}}('{{path}}', function ($request, $response, $args) {
    return $response->withStatus(200)->write('{{ack}}');
});
";

/// Slim PHP trailer: framework run call
pub const SLIM_PHP_TRAILER: &str = r"
$app->run();
";
