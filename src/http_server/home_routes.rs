//! Home page
//!
//! Static HTML listing the API routes. The two forms build the start and
//! start/end URLs in the browser; the server does no work for them.

use axum::{response::Html, routing::get, Router};

const HOME_PAGE: &str = r#"<!DOCTYPE html>
<html>
    <head>
        <title>SurfsUp Climate API</title>
        <style>
            body { font-family: Arial, sans-serif; line-height: 1.6; }
            .container { margin: 0 auto; max-width: 600px; padding: 20px; }
            h1 { color: #333; }
            ul { list-style-type: none; padding: 0; }
            li { margin: 10px 0; }
            a { text-decoration: none; color: #1e90ff; }
            a:hover { text-decoration: underline; }
            form { margin-top: 10px; }
            input[type="text"] { padding: 5px; margin-right: 10px; }
            input[type="submit"] { padding: 5px 10px; }
        </style>
        <script>
            function navigateToStart() {
                const start = encodeURIComponent(document.getElementById('start_date').value);
                window.location.href = `/api/v1.0/${start}`;
            }

            function navigateToStartEnd() {
                const start = encodeURIComponent(document.getElementById('start_date_range').value);
                const end = encodeURIComponent(document.getElementById('end_date').value);
                window.location.href = `/api/v1.0/${start}/${end}`;
            }
        </script>
    </head>
    <body>
        <div class="container">
            <h1>Welcome to the SurfsUp Climate API!</h1>
            <p>Available Routes:</p>
            <ul>
                <li>
                    <a href="/api/v1.0/precipitation">/api/v1.0/precipitation</a><br>
                    Precipitation for the last year of data, keyed by date.
                </li>
                <li>
                    <a href="/api/v1.0/stations">/api/v1.0/stations</a><br>
                    Every station code in the dataset.
                </li>
                <li>
                    <a href="/api/v1.0/tobs">/api/v1.0/tobs</a><br>
                    Temperature observations for the most active station over the last year of data.
                </li>
                <li>
                    /api/v1.0/[start_date format: yyyy-mm-dd]<br>
                    Min, average and max temperature from the start date to the end of the dataset.
                    <form onsubmit="navigateToStart(); return false;">
                        <input type="text" id="start_date" placeholder="Example: 2016-11-09" />
                        <input type="submit" value="Go" />
                    </form>
                </li>
                <li>
                    /api/v1.0/[start_date format: yyyy-mm-dd]/[end_date format: yyyy-mm-dd]<br>
                    Min, average and max temperature between the two dates, inclusive.
                    <form onsubmit="navigateToStartEnd(); return false;">
                        <input type="text" id="start_date_range" placeholder="Example: 2016-11-09" />
                        <input type="text" id="end_date" placeholder="Example: 2016-11-16" />
                        <input type="submit" value="Go" />
                    </form>
                </li>
            </ul>
        </div>
    </body>
</html>
"#;

/// Create home page routes
pub fn home_routes() -> Router {
    Router::new().route("/", get(home_handler))
}

async fn home_handler() -> Html<&'static str> {
    Html(HOME_PAGE)
}
