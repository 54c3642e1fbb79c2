use crate::schema::Session;
use anyhow::{Context, Result};
use handlebars::{
    Handlebars, Helper, HelperResult, Output, RenderContext, RenderErrorReason,
};
use serde_json::Value;

/// Values template compiled into the binary
pub const DEFAULT_TEMPLATE: &str = include_str!("../../templates/values.yaml.hbs");

const TEMPLATE_NAME: &str = "values";

/// Renders a values session into the Helm values document
pub struct ValuesRenderer {
    handlebars: Handlebars<'static>,
}

impl ValuesRenderer {
    /// Create a renderer using the embedded template
    pub fn new() -> Result<Self> {
        Self::with_template(DEFAULT_TEMPLATE)
    }

    /// Create a renderer from template source. The template is parsed here so
    /// a broken template is reported before any questions are asked.
    pub fn with_template(source: &str) -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // YAML output, never HTML
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);

        handlebars.register_helper("join", Box::new(join_helper));
        handlebars.register_helper("map", Box::new(map_helper));
        handlebars.register_helper("quote", Box::new(quote_helper));

        handlebars
            .register_template_string(TEMPLATE_NAME, source)
            .context("Failed to parse values template")?;

        Ok(Self { handlebars })
    }

    /// Render the session
    pub fn render(&self, session: &Session) -> Result<String> {
        self.handlebars
            .render(TEMPLATE_NAME, session)
            .context("Failed to render values template")
    }
}

/// Render a scalar as a double-quoted string
fn quoted(value: &Value) -> String {
    match value {
        Value::String(_) => value.to_string(),
        other => Value::String(plain(other)).to_string(),
    }
}

/// Render a scalar without quotes
fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Render a `key: value` entry as a quoted flow-map pair. An entry without a
/// colon becomes a quoted key with no value.
fn pair(entry: &Value) -> String {
    let text = plain(entry);
    match text.split_once(':') {
        Some((key, value)) => format!(
            "{}: {}",
            Value::String(key.trim().to_string()),
            Value::String(value.trim().to_string())
        ),
        None => Value::String(text.trim().to_string()).to_string(),
    }
}

fn list_param<'a>(h: &'a Helper, name: &'static str) -> Result<&'a Vec<Value>, RenderErrorReason> {
    h.param(0)
        .and_then(|v| v.value().as_array())
        .ok_or(RenderErrorReason::ParamNotFoundForIndex(name, 0))
}

/// `{{quote value}}` writes the value as a double-quoted YAML scalar
fn quote_helper(
    h: &Helper,
    _: &Handlebars,
    _: &handlebars::Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let value = h
        .param(0)
        .ok_or(RenderErrorReason::ParamNotFoundForIndex("quote", 0))?;

    out.write(&quoted(value.value()))?;
    Ok(())
}

/// `{{join list}}` writes double-quoted list entries separated by ", "
fn join_helper(
    h: &Helper,
    _: &Handlebars,
    _: &handlebars::Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let joined = list_param(h, "join")?
        .iter()
        .map(quoted)
        .collect::<Vec<_>>()
        .join(", ");

    out.write(&joined)?;
    Ok(())
}

/// `{{map list}}` writes `key: value` entries as flow-map pairs
fn map_helper(
    h: &Helper,
    _: &Handlebars,
    _: &handlebars::Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let joined = list_param(h, "map")?
        .iter()
        .map(pair)
        .collect::<Vec<_>>()
        .join(", ");

    out.write(&joined)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Value as Yaml;

    fn render_yaml(session: &Session) -> Yaml {
        let rendered = ValuesRenderer::new().unwrap().render(session).unwrap();
        serde_yaml::from_str(&rendered).unwrap()
    }

    #[test]
    fn test_default_session_renders_valid_yaml() {
        let doc = render_yaml(&Session::default());

        assert_eq!(doc["clusterInternalDomain"]["domain"], Yaml::from("cluster.local"));
        assert_eq!(doc["networking"]["istio"]["enabled"], Yaml::Bool(true));
        assert_eq!(doc["backup"]["rotation"], Yaml::from(5i64));
        assert_eq!(doc["dbs"]["minio"]["storageSize"], Yaml::from("100Gi"));
        assert_eq!(doc["controlPlane"]["smtp"]["port"], Yaml::from(587i64));
        assert_eq!(
            doc["controlPlane"]["services"]["routerEnabled"],
            Yaml::Bool(false)
        );
    }

    #[test]
    fn test_label_entries_render_as_map() {
        let mut session = Session::default();
        session.labels = vec!["team: ml".to_string(), "env: prod".to_string()];

        let doc = render_yaml(&session);

        assert_eq!(doc["labels"]["team"], Yaml::from("ml"));
        assert_eq!(doc["labels"]["env"], Yaml::from("prod"));
    }

    #[test]
    fn test_lists_render_in_order() {
        let mut session = Session::default();
        session.networking.istio.external_ip = vec!["10.0.0.1".into(), "10.0.0.2".into()];

        let doc = render_yaml(&session);

        let ips = doc["networking"]["istio"]["externalIp"].as_sequence().unwrap();
        assert_eq!(ips, &vec![Yaml::from("10.0.0.1"), Yaml::from("10.0.0.2")]);
    }

    #[test]
    fn test_quotes_are_escaped() {
        let mut session = Session::default();
        session.registry.password = r#"pa"ss: word"#.to_string();

        let doc = render_yaml(&session);

        assert_eq!(doc["registry"]["password"], Yaml::from(r#"pa"ss: word"#));
    }

    #[test]
    fn test_map_entries_with_commas_stay_one_value() {
        let mut session = Session::default();
        session.annotations = vec![
            "nginx.ingress.kubernetes.io/whitelist-source-range: 10.0.0.0/8, 192.168.0.0/16"
                .to_string(),
        ];

        let doc = render_yaml(&session);

        let annotations = doc["annotations"].as_mapping().unwrap();
        assert_eq!(annotations.len(), 1);
        assert_eq!(
            doc["annotations"]["nginx.ingress.kubernetes.io/whitelist-source-range"],
            Yaml::from("10.0.0.0/8, 192.168.0.0/16")
        );
    }

    #[test]
    fn test_map_entries_with_flow_characters() {
        let mut session = Session::default();
        session.labels = vec![
            "config: {a".to_string(),
            "note: \"x\" # y [z]".to_string(),
            "standalone".to_string(),
        ];
        session.networking.istio.ingress_svc_extra_ports = vec!["8443".into(), "{9443}".into()];

        let doc = render_yaml(&session);

        assert_eq!(doc["labels"]["config"], Yaml::from("{a"));
        assert_eq!(doc["labels"]["note"], Yaml::from("\"x\" # y [z]"));
        assert_eq!(doc["labels"]["standalone"], Yaml::Null);
        let ports = doc["networking"]["istio"]["ingressSvcExtraPorts"]
            .as_sequence()
            .unwrap();
        assert_eq!(ports, &vec![Yaml::from("8443"), Yaml::from("{9443}")]);
    }

    #[test]
    fn test_map_splits_on_first_colon() {
        assert_eq!(
            pair(&Value::from("url: http://host:8080")),
            "\"url\": \"http://host:8080\""
        );
        assert_eq!(pair(&Value::from(" solo ")), "\"solo\"");
    }

    #[test]
    fn test_render_is_deterministic() {
        let renderer = ValuesRenderer::new().unwrap();
        let session = Session::default();

        assert_eq!(
            renderer.render(&session).unwrap(),
            renderer.render(&session).unwrap()
        );
    }

    #[test]
    fn test_broken_template_rejected_up_front() {
        let result = ValuesRenderer::with_template("domain: {{#if clusterDomain}}");

        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_field_fails_in_strict_mode() {
        let renderer = ValuesRenderer::with_template("x: {{clusterDomain.missing}}").unwrap();

        assert!(renderer.render(&Session::default()).is_err());
    }

    #[test]
    fn test_custom_template() {
        let renderer = ValuesRenderer::with_template(
            "domain: {{quote clusterDomain.clusterDomain}}\nips: [{{join networking.istio.externalIp}}]\n",
        )
        .unwrap();
        let mut session = Session::default();
        session.cluster_domain.cluster_domain = "example.com".to_string();
        session.networking.istio.external_ip = vec!["1.2.3.4".into()];

        assert_eq!(
            renderer.render(&session).unwrap(),
            "domain: \"example.com\"\nips: [\"1.2.3.4\"]\n"
        );
    }
}
