use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default internal cluster domain
pub const DEFAULT_INTERNAL_DOMAIN: &str = "cluster.local";

/// Default container registry
pub const DEFAULT_REGISTRY: &str = "docker.io";

/// Reclaim policies accepted by the hostpath and NFS provisioners
pub const RECLAIM_POLICIES: &[&str] = &["Retain", "Delete", "Recycle"];

/// Ingress implementations supported by the chart
pub const INGRESS_TYPES: &[&str] = &["istio", "ingress", "openshift", "nodeport"];

/// Object storage backends supported by the control plane
pub const OBJECT_STORAGE_TYPES: &[&str] = &["minio", "aws", "azure", "gcp"];

/// Root of the values document collected during one wizard run.
///
/// Every group carries its documented defaults, so a session that is never
/// touched by the operator still renders a complete values file. Field names
/// serialize in camelCase and must line up with the values template.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Session {
    pub cluster_domain: ClusterDomain,
    pub cluster_internal_domain: ClusterInternalDomain,
    pub labels: Vec<String>,
    pub annotations: Vec<String>,
    pub networking: Networking,
    pub logging: Logging,
    pub registry: Registry,
    pub tenancy: Tenancy,
    pub sso: Sso,
    pub storage: Storage,
    pub config_reloader: ConfigReloader,
    pub capsule: Capsule,
    pub backup: Backup,
    pub gpu: Gpu,
    pub monitoring: Monitoring,
    pub control_plane: ControlPlane,
    pub dbs: Dbs,
}

impl Session {
    /// Build a session from a YAML overlay. Keys missing from the document
    /// keep their documented defaults.
    pub fn from_yaml(source: &str) -> Result<Self> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(source).context("Failed to parse defaults overlay")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClusterDomain {
    pub cluster_domain: String,
    pub spec: String,
    pub image_hub: String,
}

impl Default for ClusterDomain {
    fn default() -> Self {
        Self {
            cluster_domain: String::new(),
            spec: "allinone".to_string(),
            image_hub: "docker.io/cnvrg".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClusterInternalDomain {
    pub domain: String,
}

impl Default for ClusterInternalDomain {
    fn default() -> Self {
        Self {
            domain: DEFAULT_INTERNAL_DOMAIN.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Networking {
    pub https: Https,
    pub proxy: Proxy,
    pub ingress: Ingress,
    pub istio: Istio,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Https {
    pub enabled: bool,
    pub cert_secret: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Proxy {
    pub enabled: bool,
    pub http_proxy: Vec<String>,
    pub https_proxy: Vec<String>,
    pub no_proxy: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Ingress {
    #[serde(rename = "type")]
    pub kind: String,
    pub istio_gw_enabled: bool,
    pub istio_gw_name: String,
    pub external: bool,
}

impl Default for Ingress {
    fn default() -> Self {
        Self {
            kind: "istio".to_string(),
            istio_gw_enabled: true,
            istio_gw_name: String::new(),
            external: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Istio {
    pub enabled: bool,
    pub external_ip: Vec<String>,
    pub ingress_svc_annotations: Vec<String>,
    pub ingress_svc_extra_ports: Vec<String>,
    pub lb_source_ranges: Vec<String>,
}

impl Default for Istio {
    fn default() -> Self {
        Self {
            enabled: true,
            external_ip: Vec::new(),
            ingress_svc_annotations: Vec::new(),
            ingress_svc_extra_ports: Vec::new(),
            lb_source_ranges: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Logging {
    pub fluentbit_enabled: bool,
    pub kibana_enabled: bool,
    pub kibana_svc_name: String,
    pub elastalert: Elastalert,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            fluentbit_enabled: true,
            kibana_enabled: true,
            kibana_svc_name: "kibana".to_string(),
            elastalert: Elastalert::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Elastalert {
    pub enabled: bool,
    pub storage_size: String,
    pub storage_class: String,
    pub node_selector: Vec<String>,
}

impl Default for Elastalert {
    fn default() -> Self {
        Self {
            enabled: true,
            storage_size: "30Gi".to_string(),
            storage_class: String::new(),
            node_selector: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Registry {
    pub enabled: bool,
    pub url: String,
    pub user: String,
    pub password: String,
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            enabled: false,
            url: DEFAULT_REGISTRY.to_string(),
            user: String::new(),
            password: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Tenancy {
    pub enabled: bool,
    pub key: String,
    pub value: String,
}

impl Default for Tenancy {
    fn default() -> Self {
        Self {
            enabled: false,
            key: "purpose".to_string(),
            value: "cnvrg-control-plane".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Sso {
    pub enabled: bool,
    pub admin_user: String,
    pub provider: String,
    pub email_domain: Vec<String>,
    pub client_id: String,
    pub client_secret: String,
    pub azure_tenant: String,
    pub oidc_issuer_url: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Storage {
    pub hostpath: Hostpath,
    pub nfs: Nfs,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Hostpath {
    pub enabled: bool,
    pub default_sc: bool,
    pub path: String,
    pub reclaim_policy: String,
    pub node_selector: Vec<String>,
}

impl Default for Hostpath {
    fn default() -> Self {
        Self {
            enabled: false,
            default_sc: false,
            path: "/cnvrg-hostpath-storage".to_string(),
            reclaim_policy: "Retain".to_string(),
            node_selector: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Nfs {
    pub enabled: bool,
    pub server: String,
    pub path: String,
    pub default_sc: bool,
    pub reclaim_policy: String,
    pub image: String,
}

impl Default for Nfs {
    fn default() -> Self {
        Self {
            enabled: false,
            server: String::new(),
            path: String::new(),
            default_sc: false,
            reclaim_policy: "Retain".to_string(),
            image: "gcr.io/k8s-staging-sig-storage/nfs-subdir-external-provisioner:v4.0.0"
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigReloader {
    pub enabled: bool,
}

impl Default for ConfigReloader {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Capsule {
    pub enabled: bool,
    pub image: String,
}

impl Default for Capsule {
    fn default() -> Self {
        Self {
            enabled: true,
            image: "capsule:v0.1.0".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Backup {
    pub enabled: bool,
    pub rotation: i64,
    pub period: String,
}

impl Default for Backup {
    fn default() -> Self {
        Self {
            enabled: true,
            rotation: 5,
            period: "24h".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Gpu {
    pub nvidia_enabled: bool,
    pub habana_enabled: bool,
}

impl Default for Gpu {
    fn default() -> Self {
        Self {
            nvidia_enabled: true,
            habana_enabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Monitoring {
    pub dcgm_exporter_enabled: bool,
    pub habana_exporter_enabled: bool,
    pub node_exporter_enabled: bool,
    pub kube_state_metrics_enabled: bool,
    pub prometheus_operator_enabled: bool,
    pub default_service_monitors_enabled: bool,
    pub prometheus: Prometheus,
    pub grafana: Grafana,
    pub cnvrg_idle_metrics: IdleMetrics,
}

impl Default for Monitoring {
    fn default() -> Self {
        Self {
            dcgm_exporter_enabled: true,
            habana_exporter_enabled: true,
            node_exporter_enabled: true,
            kube_state_metrics_enabled: true,
            prometheus_operator_enabled: true,
            default_service_monitors_enabled: true,
            prometheus: Prometheus::default(),
            grafana: Grafana::default(),
            cnvrg_idle_metrics: IdleMetrics::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Prometheus {
    pub enabled: bool,
    pub storage_size: String,
    pub storage_class: String,
    pub node_selector: Vec<String>,
}

impl Default for Prometheus {
    fn default() -> Self {
        Self {
            enabled: true,
            storage_size: "50Gi".to_string(),
            storage_class: String::new(),
            node_selector: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Grafana {
    pub enabled: bool,
    pub svc_name: String,
}

impl Default for Grafana {
    fn default() -> Self {
        Self {
            enabled: true,
            svc_name: "grafana".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IdleMetrics {
    pub enabled: bool,
    pub labels: Vec<String>,
}

impl Default for IdleMetrics {
    fn default() -> Self {
        Self {
            enabled: true,
            labels: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ControlPlane {
    pub image: String,
    pub base_config: BaseConfig,
    pub services: Services,
    pub searchkiq: Autoscale,
    pub sidekiq: Sidekiq,
    pub systemkiq: Autoscale,
    pub webapp: Webapp,
    pub object_storage: ObjectStorage,
    pub smtp: Smtp,
    pub mpi: Mpi,
}

impl Default for ControlPlane {
    fn default() -> Self {
        Self {
            image: "core:3.6.99".to_string(),
            base_config: BaseConfig::default(),
            services: Services::default(),
            searchkiq: Autoscale::default(),
            sidekiq: Sidekiq::default(),
            systemkiq: Autoscale::default(),
            webapp: Webapp::default(),
            object_storage: ObjectStorage::default(),
            smtp: Smtp::default(),
            mpi: Mpi::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BaseConfig {
    pub agent_tag: String,
    pub intercom: bool,
    pub feature_flags: Vec<String>,
    pub cnvrg_privileged_job: bool,
}

impl Default for BaseConfig {
    fn default() -> Self {
        Self {
            agent_tag: "latest".to_string(),
            intercom: true,
            feature_flags: Vec::new(),
            cnvrg_privileged_job: true,
        }
    }
}

/// Control-plane workloads that can be switched on or off
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Services {
    pub hyper_enabled: bool,
    pub scheduler_enabled: bool,
    pub cluster_provisioner_enabled: bool,
    pub searchkiq_enabled: bool,
    pub sidekiq_enabled: bool,
    pub systemkiq_enabled: bool,
    pub webapp_enabled: bool,
    pub mpi_enabled: bool,
    pub router_enabled: bool,
}

impl Default for Services {
    fn default() -> Self {
        Self {
            hyper_enabled: true,
            scheduler_enabled: true,
            cluster_provisioner_enabled: false,
            searchkiq_enabled: true,
            sidekiq_enabled: true,
            systemkiq_enabled: true,
            webapp_enabled: true,
            mpi_enabled: true,
            router_enabled: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Autoscale {
    pub hpa_enabled: bool,
    pub hpa_max_replicas: i64,
}

impl Default for Autoscale {
    fn default() -> Self {
        Self {
            hpa_enabled: true,
            hpa_max_replicas: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Sidekiq {
    pub split: bool,
    pub hpa_enabled: bool,
    pub hpa_max_replicas: i64,
}

impl Default for Sidekiq {
    fn default() -> Self {
        Self {
            split: true,
            hpa_enabled: true,
            hpa_max_replicas: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Webapp {
    pub svc_name: String,
    pub replicas: i64,
    pub hpa_enabled: bool,
    pub hpa_max_replicas: i64,
}

impl Default for Webapp {
    fn default() -> Self {
        Self {
            svc_name: "app".to_string(),
            replicas: 1,
            hpa_enabled: true,
            hpa_max_replicas: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectStorage {
    #[serde(rename = "type")]
    pub kind: String,
    pub bucket: String,
    pub region: String,
    pub access_key: String,
    pub secret_key: String,
    pub endpoint: String,
    pub azure_account_name: String,
    pub azure_container: String,
    pub gcp_secret_ref: String,
    pub gcp_project: String,
}

impl Default for ObjectStorage {
    fn default() -> Self {
        Self {
            kind: "minio".to_string(),
            bucket: "cnvrg-storage".to_string(),
            region: "eastus".to_string(),
            access_key: String::new(),
            secret_key: String::new(),
            endpoint: String::new(),
            azure_account_name: String::new(),
            azure_container: String::new(),
            gcp_secret_ref: String::new(),
            gcp_project: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Smtp {
    pub server: String,
    pub port: i64,
    pub username: String,
    pub password: String,
    pub domain: String,
    pub openssl_verify_mode: String,
    pub sender: String,
}

impl Default for Smtp {
    fn default() -> Self {
        Self {
            server: String::new(),
            port: 587,
            username: String::new(),
            password: String::new(),
            domain: String::new(),
            openssl_verify_mode: String::new(),
            sender: "info@cnvrg.io".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Mpi {
    pub image: String,
    pub kubectl_image: String,
    pub extra_args: Vec<String>,
    pub registry_url: String,
    pub registry_user: String,
    pub registry_password: String,
}

impl Default for Mpi {
    fn default() -> Self {
        Self {
            image: "mpioperator/mpi-operator:v0.2.3".to_string(),
            kubectl_image: "mpioperator/kubectl-delivery:v0.2.3".to_string(),
            extra_args: Vec::new(),
            registry_url: DEFAULT_REGISTRY.to_string(),
            registry_user: String::new(),
            registry_password: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Dbs {
    pub cvat: Cvat,
    pub es: Elasticsearch,
    pub minio: DataStore,
    pub pg: Postgres,
    pub redis: DataStore,
}

impl Default for Dbs {
    fn default() -> Self {
        Self {
            cvat: Cvat::default(),
            es: Elasticsearch::default(),
            minio: DataStore::sized("100Gi"),
            pg: Postgres::default(),
            redis: DataStore::sized("10Gi"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Cvat {
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Elasticsearch {
    pub enabled: bool,
    pub storage_size: String,
    pub storage_class: String,
    pub patch_es_nodes: bool,
    pub node_selector: Vec<String>,
    pub cleanup_policy: CleanupPolicy,
}

impl Default for Elasticsearch {
    fn default() -> Self {
        Self {
            enabled: true,
            storage_size: "80Gi".to_string(),
            storage_class: String::new(),
            patch_es_nodes: true,
            node_selector: Vec::new(),
            cleanup_policy: CleanupPolicy::default(),
        }
    }
}

/// Retention windows for Elasticsearch indices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CleanupPolicy {
    pub all: String,
    pub app: String,
    pub jobs: String,
    pub endpoints: String,
}

impl Default for CleanupPolicy {
    fn default() -> Self {
        Self {
            all: "3d".to_string(),
            app: "30d".to_string(),
            jobs: "14d".to_string(),
            endpoints: "1d".to_string(),
        }
    }
}

/// Storage-backed database with the common volume settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataStore {
    pub enabled: bool,
    pub storage_size: String,
    pub storage_class: String,
    pub node_selector: Vec<String>,
}

impl DataStore {
    pub fn sized(storage_size: &str) -> Self {
        Self {
            enabled: true,
            storage_size: storage_size.to_string(),
            storage_class: String::new(),
            node_selector: Vec::new(),
        }
    }
}

impl Default for DataStore {
    fn default() -> Self {
        Self::sized("10Gi")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Postgres {
    pub enabled: bool,
    pub storage_size: String,
    pub storage_class: String,
    pub node_selector: Vec<String>,
    pub huge_pages: HugePages,
}

impl Default for Postgres {
    fn default() -> Self {
        Self {
            enabled: true,
            storage_size: "80Gi".to_string(),
            storage_class: String::new(),
            node_selector: Vec::new(),
            huge_pages: HugePages::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HugePages {
    pub enabled: bool,
    pub size: String,
    pub memory: String,
}

impl Default for HugePages {
    fn default() -> Self {
        Self {
            enabled: false,
            size: "2Mi".to_string(),
            memory: String::new(),
        }
    }
}

/// Normalise a storage size to the `Gi` unit: `30`, `30gi` and `30Gi`
/// all become `30Gi`.
pub fn gibibytes(raw: &str) -> String {
    let trimmed = raw.trim();
    let split = trimmed.len().checked_sub(2).filter(|&i| {
        trimmed
            .get(i..)
            .is_some_and(|suffix| suffix.eq_ignore_ascii_case("gi"))
    });
    let number = match split {
        Some(i) => &trimmed[..i],
        None => trimmed,
    };
    format!("{}Gi", number.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_defaults() {
        let session = Session::default();

        assert_eq!(session.cluster_domain.cluster_domain, "");
        assert_eq!(session.cluster_internal_domain.domain, "cluster.local");
        assert!(session.networking.istio.enabled);
        assert!(session.networking.ingress.istio_gw_enabled);
        assert!(session.backup.enabled);
        assert_eq!(session.backup.rotation, 5);
        assert_eq!(session.backup.period, "24h");
        assert_eq!(session.storage.hostpath.path, "/cnvrg-hostpath-storage");
        assert!(session.logging.fluentbit_enabled);
        assert!(session.gpu.nvidia_enabled && session.gpu.habana_enabled);
        assert!(!session.registry.enabled);
        assert!(!session.sso.enabled);
        assert!(session.labels.is_empty());
    }

    #[test]
    fn test_databases_keep_their_own_sizes() {
        let session = Session::default();

        assert_eq!(session.dbs.es.storage_size, "80Gi");
        assert_eq!(session.dbs.minio.storage_size, "100Gi");
        assert_eq!(session.dbs.pg.storage_size, "80Gi");
        assert_eq!(session.dbs.redis.storage_size, "10Gi");
        assert!(session.dbs.es.enabled && session.dbs.minio.enabled);
        assert!(!session.dbs.cvat.enabled);
    }

    #[test]
    fn test_from_yaml_overlays_defaults() {
        let overlay = r#"
clusterDomain:
  clusterDomain: apps.example.com
backup:
  rotation: 9
dbs:
  redis:
    enabled: false
"#;
        let session = Session::from_yaml(overlay).unwrap();

        assert_eq!(session.cluster_domain.cluster_domain, "apps.example.com");
        assert_eq!(session.cluster_domain.spec, "allinone");
        assert_eq!(session.backup.rotation, 9);
        assert_eq!(session.backup.period, "24h");
        assert!(!session.dbs.redis.enabled);
        assert_eq!(session.dbs.redis.storage_size, "10Gi");
        assert_eq!(session.dbs.minio.storage_size, "100Gi");
    }

    #[test]
    fn test_from_yaml_empty_document() {
        assert_eq!(Session::from_yaml("  \n").unwrap(), Session::default());
    }

    #[test]
    fn test_from_yaml_rejects_malformed_input() {
        let err = Session::from_yaml("backup: [not, a, map").unwrap_err();
        assert!(err.to_string().contains("defaults overlay"));
    }

    #[test]
    fn test_gibibytes() {
        assert_eq!(gibibytes("30"), "30Gi");
        assert_eq!(gibibytes("30gi"), "30Gi");
        assert_eq!(gibibytes(" 120Gi "), "120Gi");
    }
}
