//! Template engine for rendering directory pages.

use minijinja::{context, Environment};

/// An index card linking to one detail page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Card {
    /// Company name
    pub name: String,
    /// Detail page filename, e.g. "dar_solar_tech.html"
    pub href: String,
    /// Free-text location
    pub location: String,
    /// Free-text services line
    pub services: String,
}

/// Context for rendering the index page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct IndexContext {
    /// Site title
    pub site_title: String,
    /// Base URL
    pub base_url: String,
    /// One card per record, in input order
    pub cards: Vec<Card>,
}

/// Context for rendering one company detail page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CompanyContext {
    /// Company name, used as the page title
    pub name: String,
    /// Site title
    pub site_title: String,
    /// Base URL
    pub base_url: String,
    /// Free-text location
    pub location: String,
    /// Free-text services line
    pub services: String,
    /// Description, already defaulted to a placeholder when missing
    pub description: String,
    /// Company website URL, when known
    pub website: Option<String>,
    /// WhatsApp click-to-chat URL, when a phone number is known
    pub whatsapp: Option<String>,
    /// Accent color for the page header
    pub color: String,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template_owned("base.html".to_string(), BASE_TEMPLATE.to_string())
            .expect("Failed to add base template");

        env.add_template_owned("index.html".to_string(), INDEX_TEMPLATE.to_string())
            .expect("Failed to add index template");

        env.add_template_owned("company.html".to_string(), COMPANY_TEMPLATE.to_string())
            .expect("Failed to add company template");

        env.add_template_owned("thanks.html".to_string(), THANKS_TEMPLATE.to_string())
            .expect("Failed to add thanks template");

        Self { env }
    }

    /// Render the index page.
    pub fn render_index(&self, ctx: &IndexContext) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("index.html")?;

        tmpl.render(context! {
            title => "Home",
            site_title => &ctx.site_title,
            base_url => &ctx.base_url,
            cards => &ctx.cards,
        })
    }

    /// Render one company detail page.
    pub fn render_company(&self, ctx: &CompanyContext) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("company.html")?;

        tmpl.render(context! {
            title => &ctx.name,
            site_title => &ctx.site_title,
            base_url => &ctx.base_url,
            name => &ctx.name,
            location => &ctx.location,
            services => &ctx.services,
            description => &ctx.description,
            website => &ctx.website,
            whatsapp => &ctx.whatsapp,
            color => &ctx.color,
        })
    }

    /// Render the form-success page.
    pub fn render_thanks(
        &self,
        site_title: &str,
        base_url: &str,
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("thanks.html")?;

        tmpl.render(context! {
            title => "Thank You",
            site_title => site_title,
            base_url => base_url,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }} - {{ site_title }}</title>
  <link rel="stylesheet" href="{{ base_url }}assets/style.css">
</head>
<body>
{% block content %}{% endblock %}
</body>
</html>"##;

const INDEX_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<header class="hero">
  <h1>{{ site_title }}</h1>
  <p>Find trusted solar installers and suppliers near you.</p>
  <input type="search" id="search" placeholder="Search by name, location or service...">
</header>
<div class="grid" id="companies">
{% for card in cards %}
  <a class="card" href="{{ card.href }}">
    <h3>{{ card.name }}</h3>
    {% if card.location %}<p>&#128205; {{ card.location }}</p>{% endif %}
    {% if card.services %}<p>&#9889; {{ card.services }}</p>{% endif %}
    <p class="more">View details &rarr;</p>
  </a>
{% endfor %}
</div>
<div class="calculator">
  <h2>Estimate Your System Cost</h2>
  <input type="number" id="watts" placeholder="Power needed (watts)">
  <input type="number" id="hours" placeholder="Hours of use per day">
  <button type="button" id="estimate">Calculate</button>
  <p id="result"></p>
</div>
<script src="{{ base_url }}assets/script.js"></script>
{% endblock %}"##;

const COMPANY_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<a class="back" href="{{ base_url }}index.html" style="color: {{ color }};">&larr; Back to directory</a>
<div class="header" style="background: {{ color }};">
  <h1>{{ name }}</h1>
  {% if location %}<p>Solar energy solutions - {{ location }}</p>{% endif %}
</div>
<div class="content">
  <p>{{ description }}</p>
  {% if services %}<p><strong>Services:</strong> {{ services }}</p>{% endif %}
  {% if location %}<p><strong>Location:</strong> {{ location }}</p>{% endif %}
  <p><strong>Website:</strong>
    {% if website %}<a href="{{ website }}" rel="nofollow">{{ website }}</a>{% else %}Not available{% endif %}
  </p>
  {% if whatsapp %}
  <a class="chat" href="{{ whatsapp }}" style="background: {{ color }};">Chat on WhatsApp</a>
  {% endif %}
</div>
<div class="form-box" style="border-color: {{ color }};">
  <h3>Get a Free Quotation</h3>
  <form name="contact" method="POST" data-netlify="true" action="{{ base_url }}thanks.html">
    <input type="hidden" name="form-name" value="contact" />
    <input type="hidden" name="company" value="{{ name }}" />
    <p>
      <label>Your name: <input type="text" name="name" required /></label>
    </p>
    <p>
      <label>Phone number: <input type="tel" name="phone" required /></label>
    </p>
    <button type="submit" class="btn" style="background: {{ color }};">Request a Quote</button>
  </form>
</div>
{% endblock %}"##;

const THANKS_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<div class="thanks">
  <h1>&#9989; Thank You!</h1>
  <p>We have received your details. A solar specialist will call you shortly.</p>
  <a href="{{ base_url }}index.html">Back to the directory</a>
</div>
{% endblock %}"##;
