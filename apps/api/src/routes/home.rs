use axum::response::Html;

/// Static informational page served at `/`.
const HOME_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>AI Blog Post Generator</title>
    <style>
        body {
            font-family: Arial, sans-serif;
            max-width: 800px;
            margin: 0 auto;
            padding: 20px;
            line-height: 1.6;
        }
        h1 {
            color: #333;
            text-align: center;
        }
        .container {
            background-color: #f5f5f5;
            padding: 20px;
            border-radius: 8px;
            margin-top: 20px;
        }
        .endpoint {
            background-color: #e9ecef;
            padding: 10px;
            border-radius: 4px;
            font-family: monospace;
            margin: 10px 0;
        }
        .example {
            color: #666;
            font-style: italic;
        }
    </style>
</head>
<body>
    <h1>AI Blog Post Generator</h1>
    <div class="container">
        <h2>API Endpoints</h2>
        <p>Generate a blog post by making a GET request to:</p>
        <div class="endpoint">/generate?keyword=your_keyword</div>
        <p class="example">Example: <a href="/generate?keyword=wireless%20earbuds">/generate?keyword=wireless%20earbuds</a></p>
        <p>Check the last scheduled run:</p>
        <div class="endpoint">/jobs/daily</div>

        <h2>Features</h2>
        <ul>
            <li>Generate SEO-optimized blog posts</li>
            <li>Automatic daily post generation</li>
            <li>Affiliate link integration</li>
            <li>HTML-formatted output</li>
        </ul>
    </div>
</body>
</html>
"#;

/// GET /
pub async fn home_handler() -> Html<&'static str> {
    Html(HOME_PAGE)
}
