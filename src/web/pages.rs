// src/web/pages.rs

//! Static landing page.

/// Form page served at `/`. Submits the URL to `/fetch` and shows the
/// resulting code and preview link inline.
pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Web Page Mirror</title>
    <meta charset="utf-8">
    <style>
        body { font-family: Arial, sans-serif; max-width: 800px; margin: 50px auto; padding: 20px; }
        .container { background: #f5f5f5; padding: 30px; border-radius: 10px; }
        h1 { color: #333; }
        .form-group { margin: 20px 0; }
        label { display: block; margin-bottom: 5px; font-weight: bold; }
        input[type="url"] { width: 100%; padding: 10px; border: 1px solid #ddd; border-radius: 5px; }
        button { background: #007bff; color: white; padding: 10px 20px; border: none; border-radius: 5px; cursor: pointer; }
        button:hover { background: #0056b3; }
        .result { margin-top: 20px; padding: 15px; background: white; border-radius: 5px; }
        .error { background: #f8d7da; color: #721c24; }
        .success { background: #d4edda; color: #155724; }
    </style>
</head>
<body>
    <div class="container">
        <h1>Web Page Mirror</h1>
        <p>Enter a page URL to create a mirror of it</p>

        <form id="fetchForm">
            <div class="form-group">
                <label for="url">Page URL:</label>
                <input type="url" id="url" name="url" placeholder="https://example.com" required>
            </div>
            <button type="submit">Create mirror</button>
        </form>

        <div id="result" style="display: none;"></div>
    </div>

    <script>
        document.getElementById('fetchForm').addEventListener('submit', async (e) => {
            e.preventDefault();
            const url = document.getElementById('url').value;
            const resultDiv = document.getElementById('result');

            resultDiv.style.display = 'block';
            resultDiv.className = 'result';
            resultDiv.innerHTML = 'Working...';

            try {
                const response = await fetch('/fetch?u=' + encodeURIComponent(url));
                const data = await response.json();

                if (response.ok) {
                    resultDiv.className = 'result success';
                    resultDiv.innerHTML = `
                        <h3>Mirror created</h3>
                        <p><strong>Code:</strong> ${data.code}</p>
                        ${data.iframe_url ? `<p><strong>Frame URL:</strong> ${data.iframe_url}</p>` : ''}
                        <p><strong>Preview:</strong> <a href="${data.preview_url}" target="_blank">${data.preview_url}</a></p>
                    `;
                } else {
                    resultDiv.className = 'result error';
                    resultDiv.innerHTML = `<h3>Error</h3><p>${data.error}</p>`;
                }
            } catch (error) {
                resultDiv.className = 'result error';
                resultDiv.innerHTML = `<h3>Request failed</h3><p>${error.message}</p>`;
            }
        });
    </script>
</body>
</html>
"#;
