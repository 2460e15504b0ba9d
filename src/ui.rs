use crate::models::OfferForm;
use crate::state::{Tab, ViewState};

/// Renders the whole page from the view state. Every interpolated value goes
/// through `escape_html`.
pub fn render_index(view: &ViewState) -> String {
    let refresh_meta = if view.in_flight > 0 {
        r#"<meta http-equiv="refresh" content="1" />"#
    } else {
        ""
    };
    let sync_status = if view.in_flight > 0 {
        format!(r#"<span class="syncing">Syncing ({})&hellip;</span>"#, view.in_flight)
    } else {
        match &view.refreshed_at {
            Some(at) => format!("Updated {}", escape_html(at)),
            None => String::new(),
        }
    };

    INDEX_HTML
        .replace("{{REFRESH_META}}", refresh_meta)
        .replace("{{ADD_LINK_CLASS}}", link_class(view, Tab::Add))
        .replace("{{LIST_LINK_CLASS}}", link_class(view, Tab::List))
        .replace("{{ADD_DISPLAY}}", display(view, Tab::Add))
        .replace("{{LIST_DISPLAY}}", display(view, Tab::List))
        .replace("{{NOTICES}}", &render_notices(&view.notices))
        .replace("{{FORM_FIELDS}}", &render_form_fields(&view.draft))
        .replace("{{ROWS}}", &render_rows(view))
        .replace("{{TOTAL}}", &view.total_count().to_string())
        .replace("{{SYNC_STATUS}}", &sync_status)
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
        .replace('{', "&#123;")
}

/// One `<tr>` per offer, in the order the server returned them.
pub fn render_rows(view: &ViewState) -> String {
    view.offers
        .iter()
        .map(|offer| {
            let cells: String = offer
                .cells()
                .iter()
                .map(|cell| format!("<td>{}</td>", escape_html(cell)))
                .collect();
            format!("<tr>{cells}</tr>\n")
        })
        .collect()
}

fn link_class(view: &ViewState, tab: Tab) -> &'static str {
    if view.is_active(tab) { "tablinks active" } else { "tablinks" }
}

fn display(view: &ViewState, tab: Tab) -> &'static str {
    if view.is_visible(tab) { "block" } else { "none" }
}

fn render_notices(notices: &[String]) -> String {
    if notices.is_empty() {
        return String::new();
    }
    let items: String = notices
        .iter()
        .map(|notice| format!("<li>{}</li>", escape_html(notice)))
        .collect();
    format!(r#"<ul class="notices">{items}</ul>"#)
}

fn render_form_fields(draft: &OfferForm) -> String {
    let fields: [(&str, &str, &str); 10] = [
        ("upc", "UPC", draft.upc.as_str()),
        ("name", "Name", draft.name.as_str()),
        ("partyName", "Party name", draft.party_name.as_str()),
        ("semanticName", "Semantic name", draft.semantic_name.as_str()),
        ("mainImageFileUrl", "Main image URL", draft.main_image_file_url.as_str()),
        ("partyImageFileUrl", "Party image URL", draft.party_image_file_url.as_str()),
        ("productCategory", "Product category", draft.product_category.as_str()),
        ("price", "Price", draft.price.as_str()),
        ("rating", "Rating", draft.rating.as_str()),
        ("numReviews", "Reviews", draft.num_reviews.as_str()),
    ];

    fields
        .iter()
        .map(|(name, label, value)| {
            format!(
                r#"<label>{label}<input type="text" name="{name}" value="{}" /></label>"#,
                escape_html(value)
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  {{REFRESH_META}}
  <title>Offers</title>
  <style>
    body {
      margin: 0;
      padding: 32px 18px;
      font-family: "Trebuchet MS", sans-serif;
      background: #f6f4ef;
      color: #2b2a28;
    }

    .app {
      max-width: 1100px;
      margin: 0 auto;
    }

    .tab {
      display: flex;
      gap: 8px;
      margin-bottom: 16px;
    }

    .tab form {
      margin: 0;
    }

    .tablinks {
      border: none;
      border-radius: 999px;
      padding: 10px 18px;
      background: #e4ded2;
      cursor: pointer;
    }

    .tablinks.active {
      background: #2f4858;
      color: white;
    }

    .tabcontent {
      background: white;
      border-radius: 16px;
      padding: 20px;
    }

    #addForm label {
      display: grid;
      gap: 4px;
      margin-bottom: 10px;
    }

    .notices {
      color: #b3261e;
    }

    table {
      width: 100%;
      border-collapse: collapse;
      font-size: 0.9rem;
    }

    th, td {
      text-align: left;
      padding: 6px 8px;
      border-bottom: 1px solid #eee;
      word-break: break-all;
    }

    .footer {
      display: flex;
      justify-content: space-between;
      margin-top: 12px;
      color: #6b665e;
    }
  </style>
</head>
<body>
  <main class="app">
    <div class="tab">
      <form method="post" action="/tab/add">
        <button id="add-tab-btn" class="{{ADD_LINK_CLASS}}" type="submit">Add offer</button>
      </form>
      <form method="post" action="/tab/list">
        <button id="list-tab-btn" class="{{LIST_LINK_CLASS}}" type="submit">Offer list</button>
      </form>
    </div>

    <section id="add-tab" class="tabcontent" style="display: {{ADD_DISPLAY}}">
      {{NOTICES}}
      <form id="addForm" method="post" action="/offers">
        {{FORM_FIELDS}}
        <button type="submit">Submit</button>
      </form>
    </section>

    <section id="list-tab" class="tabcontent" style="display: {{LIST_DISPLAY}}">
      <table>
        <thead>
          <tr>
            <th>Id</th><th>UPC</th><th>Name</th><th>Party</th><th>Semantic name</th>
            <th>Main image</th><th>Party image</th><th>Category</th>
            <th>Price</th><th>Rating</th><th>Reviews</th>
          </tr>
        </thead>
        <tbody id="tableBody">
{{ROWS}}        </tbody>
      </table>
      <div class="footer">
        <span>{{TOTAL}} offers</span>
        <span>{{SYNC_STATUS}}</span>
        <form method="post" action="/reset">
          <button id="resetBtn" type="submit">Reset</button>
        </form>
      </div>
    </section>
  </main>
</body>
</html>
"#;
