//! Static assets shipped with every generated site.
//!
//! The stylesheet and client script are fixed text, independent of the
//! record data. The script reads `companies.json` at runtime and owns all
//! client-side behavior (card rendering and the search filter); the builder
//! only ships it.

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// The site stylesheet.
    pub fn generate_css() -> String {
        DEFAULT_CSS.to_string()
    }

    /// The client script.
    pub fn generate_js() -> String {
        DEFAULT_JS.to_string()
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

const DEFAULT_CSS: &str = r#"/* jua directory theme */

* {
  box-sizing: border-box;
}

body {
  font-family: 'Segoe UI', system-ui, sans-serif;
  line-height: 1.6;
  color: #333;
  background: #f5f5f5;
  max-width: 1000px;
  margin: auto;
  padding: 20px;
}

/* Index */
.hero {
  text-align: center;
  padding: 40px 20px;
}

.hero input[type="search"] {
  width: 100%;
  max-width: 480px;
  padding: 12px 16px;
  margin-top: 20px;
  border: 1px solid #ddd;
  border-radius: 8px;
  font-size: 1rem;
}

.grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
  gap: 20px;
}

.card {
  background: white;
  padding: 25px;
  border-radius: 12px;
  text-decoration: none;
  color: #333;
  box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
  display: block;
}

.card:hover {
  background: #f4b400;
  color: white;
}

.card .more {
  font-weight: bold;
}

/* Detail pages */
.back {
  text-decoration: none;
  font-weight: bold;
}

.header {
  color: white;
  padding: 40px 20px;
  text-align: center;
  border-radius: 15px;
  margin: 20px 0 30px;
}

.content {
  background: white;
  padding: 30px;
  border-radius: 15px;
  box-shadow: 0 4px 15px rgba(0, 0, 0, 0.1);
}

.chat {
  display: inline-block;
  color: white;
  padding: 12px 24px;
  border-radius: 8px;
  text-decoration: none;
  font-weight: bold;
  margin-top: 10px;
}

.form-box {
  background: #fdfdfd;
  padding: 30px;
  border: 2px dashed #ccc;
  border-radius: 15px;
  margin-top: 40px;
}

.form-box input[type="text"],
.form-box input[type="tel"] {
  width: 100%;
  padding: 10px;
  margin: 10px 0;
  border: 1px solid #ddd;
}

.btn {
  color: white;
  padding: 15px;
  border: none;
  width: 100%;
  border-radius: 8px;
  font-weight: bold;
  cursor: pointer;
}

/* Cost calculator */
.calculator {
  background: white;
  padding: 30px;
  border-radius: 12px;
  box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
  margin-top: 40px;
  text-align: center;
}

.calculator input[type="number"] {
  width: 100%;
  max-width: 320px;
  padding: 10px;
  margin: 8px 0;
  border: 1px solid #ddd;
  border-radius: 8px;
  display: block;
  margin-left: auto;
  margin-right: auto;
}

.calculator button {
  background: #f4b400;
  color: white;
  padding: 12px 24px;
  border: none;
  border-radius: 8px;
  font-weight: bold;
  cursor: pointer;
  margin-top: 10px;
}

/* Thanks page */
.thanks {
  text-align: center;
  padding: 100px 20px;
}
"#;

const DEFAULT_JS: &str = r#"// jua directory - client-side rendering and search
(function () {
  'use strict';

  const container = document.getElementById('companies');
  const search = document.getElementById('search');

  function calculate() {
    const watts = document.getElementById('watts').value;
    const hours = document.getElementById('hours').value;
    const result = document.getElementById('result');
    if (!watts || !hours) {
      result.innerText = 'Please fill all fields.';
      return;
    }
    const cost = watts * hours * 5;
    result.innerText = 'Estimated basic system cost: Tsh ' + cost.toLocaleString();
  }

  const estimate = document.getElementById('estimate');
  if (estimate) {
    estimate.addEventListener('click', calculate);
  }

  if (!container) return;

  // Must match the slug the generator derives for detail page filenames.
  function slugify(name) {
    let slug = '';
    let lastSep = true;
    for (const c of name.trim().toLowerCase()) {
      if (/\s/.test(c)) {
        if (!lastSep) {
          slug += '_';
          lastSep = true;
        }
      } else if (/[a-z0-9_-]/.test(c)) {
        slug += c;
        lastSep = false;
      }
    }
    return slug.replace(/_+$/, '');
  }

  function detailHref(company, index) {
    const slug = slugify(company.name || '');
    return (slug || 'company_' + (index + 1)) + '.html';
  }

  function render(companies) {
    container.innerHTML = '';

    companies.forEach((c, i) => {
      const card = document.createElement('a');
      card.className = 'card';
      card.href = detailHref(c, i);
      card.dataset.haystack = [c.name, c.location, c.services, c.description, c.phone, c.website]
        .filter(Boolean)
        .join(' ')
        .toLowerCase();

      const title = document.createElement('h3');
      title.textContent = c.name;
      card.appendChild(title);

      if (c.location) {
        const location = document.createElement('p');
        location.textContent = '\u{1F4CD} ' + c.location;
        card.appendChild(location);
      }

      if (c.services) {
        const services = document.createElement('p');
        services.textContent = '⚡ ' + c.services;
        card.appendChild(services);
      }

      const more = document.createElement('p');
      more.className = 'more';
      more.textContent = 'View details →';
      card.appendChild(more);

      container.appendChild(card);
    });
  }

  function applyFilter() {
    const query = (search.value || '').trim().toLowerCase();
    container.querySelectorAll('.card').forEach(card => {
      const match = !query || (card.dataset.haystack || '').includes(query);
      card.style.display = match ? '' : 'none';
    });
  }

  fetch('companies.json')
    .then(response => response.json())
    .then(companies => {
      render(companies);
      if (search) {
        search.addEventListener('input', applyFilter);
      }
    })
    .catch(() => {
      // Leave the server-rendered cards in place if the data file is missing.
    });
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_css() {
        let css = AssetPipeline::generate_css();
        assert!(css.contains(".card"));
        assert!(css.contains(".grid"));
        assert!(css.contains(".form-box"));
    }

    #[test]
    fn generates_js() {
        let js = AssetPipeline::generate_js();
        assert!(js.contains("companies.json"));
        assert!(js.contains("slugify"));
        assert!(js.contains("addEventListener"));
    }

    #[test]
    fn script_includes_cost_calculator() {
        let js = AssetPipeline::generate_js();
        assert!(js.contains("function calculate"));
        assert!(js.contains("watts * hours * 5"));
        assert!(js.contains("Tsh"));

        let css = AssetPipeline::generate_css();
        assert!(css.contains(".calculator"));
    }

    #[test]
    fn minifies_css() {
        let css = r#"
.card {
    background-color: white;
    padding: 25px;
}
        "#;

        let minified = AssetPipeline::minify_css(css).unwrap();

        assert!(!minified.contains('\n'));
        assert!(minified.contains(".card"));
    }
}
