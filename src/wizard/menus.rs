//! The menu tree of the values wizard.
//!
//! Each group of the values document gets its own menu. Option numbers
//! follow the order options are added here, not the order of fields in the
//! schema.

use crate::schema::values::{
    gibibytes, DEFAULT_INTERNAL_DOMAIN, DEFAULT_REGISTRY, INGRESS_TYPES, OBJECT_STORAGE_TYPES, RECLAIM_POLICIES,
};
use crate::wizard::menu::Menu;

/// Top level menu; option 12 exits and generates the values file
pub fn root() -> Menu {
    Menu::new("Main")
        .submenu(
            "Modify Labeling ---------------> [ Labels, Annotations or Internal Domain ]",
            labeling(),
        )
        .submenu(
            "Modify Network settings -------> [ Istio, NodePort, HTTPS ]",
            networking(),
        )
        .submenu(
            "Modify Logging settings -------> [ Kibana, ElasticAlert, Fluentbit ]",
            logging(),
        )
        .submenu(
            "Modify Registry settings ------> [ URL, Username, Password ]",
            registry(),
        )
        .submenu(
            "Modify Tenancy settings -------> [ Node Selector ]",
            tenancy(),
        )
        .submenu(
            "Modify Single Sign On settings > [ Admin, Provider, Azure Tenant ]",
            sso(),
        )
        .submenu(
            "Modify Storage settings -------> [ NFS, Hostpath ]",
            storage(),
        )
        .submenu(
            "Modify Miscellaneous settings -> [ Backup, GPU, ConfigReloader, Capsule ]",
            miscellaneous(),
        )
        .submenu(
            "Modify Monitoring settings ----> [ Prometheus, Grafana, Exporters ]",
            monitoring(),
        )
        .submenu(
            "Modify Control Plane settings -> [ CP Image, CP Services, SMTP ]",
            control_plane(),
        )
        .submenu(
            "Modify Database settings ------> [ Minio, Postgres, Redis ]",
            databases(),
        )
        .done("Exit and generate Values file")
}

fn labeling() -> Menu {
    Menu::new("Labels, Annotations and Internal Domain")
        .list("Add Labels, format [key: value]", "labels", |s, v| {
            s.labels.extend(v)
        })
        .list(
            "Add Annotations, format [key: value]",
            "annotations",
            |s, v| s.annotations.extend(v),
        )
        .text(
            "Input the internal cluster domain",
            "clusterInternalDomain.domain",
            Some(DEFAULT_INTERNAL_DOMAIN),
            |s, v| s.cluster_internal_domain.domain = v,
        )
}

fn networking() -> Menu {
    Menu::new("Networking")
        .submenu("Proxy Settings", proxy())
        .submenu("Ingress Settings", ingress())
        .submenu("HTTPS Settings", https())
        .submenu("Istio Settings", istio())
}

fn proxy() -> Menu {
    Menu::new("Proxy")
        .set(
            "Enable Proxy",
            "networking.proxy.enabled",
            "Proxy enabled",
            |s| s.networking.proxy.enabled = true,
        )
        .list(
            "Input HTTP proxies to use",
            "networking.proxy.httpProxy",
            |s, v| {
                s.networking.proxy.http_proxy = v;
                s.networking.proxy.enabled = true;
            },
        )
        .list(
            "Input HTTPS proxies to use",
            "networking.proxy.httpsProxy",
            |s, v| {
                s.networking.proxy.https_proxy = v;
                s.networking.proxy.enabled = true;
            },
        )
        .list(
            "Input extra No Proxy values to use",
            "networking.proxy.noProxy",
            |s, v| {
                s.networking.proxy.no_proxy = v;
                s.networking.proxy.enabled = true;
            },
        )
}

fn ingress() -> Menu {
    Menu::new("Ingress")
        .choice(
            "What is the ingress type",
            "networking.ingress.type",
            INGRESS_TYPES,
            None,
            |s, v| {
                // Only the istio ingress runs on the Istio gateway
                let istio = v == "istio";
                s.networking.istio.enabled = istio;
                s.networking.ingress.istio_gw_enabled = istio;
                s.networking.ingress.kind = v;
            },
        )
        .text(
            "Input the Istio gateway name",
            "networking.ingress.istioGwName",
            None,
            |s, v| s.networking.ingress.istio_gw_name = v,
        )
        .confirm(
            "Expose the ingress externally",
            "networking.ingress.external",
            |s, v| s.networking.ingress.external = v,
        )
}

fn https() -> Menu {
    Menu::new("HTTPS")
        .confirm(
            "Do you want to enable HTTPS",
            "networking.https.enabled",
            |s, v| s.networking.https.enabled = v,
        )
        .verbatim(
            "What do you want to name the Certificate secret",
            "networking.https.certSecret",
            |s, v| {
                s.networking.https.cert_secret = v;
                s.networking.https.enabled = true;
            },
        )
}

fn istio() -> Menu {
    Menu::new("Istio")
        .set(
            "Disable Istio",
            "networking.istio.enabled",
            "Istio is disabled",
            |s| s.networking.istio.enabled = false,
        )
        .list(
            "List IPs to use for istio ingress service",
            "networking.istio.externalIp",
            |s, v| {
                s.networking.istio.external_ip = v;
                s.networking.istio.enabled = true;
            },
        )
        .list(
            "List extra ports for istio ingress service",
            "networking.istio.ingressSvcExtraPorts",
            |s, v| {
                s.networking.istio.ingress_svc_extra_ports = v;
                s.networking.istio.enabled = true;
            },
        )
        .list(
            "List extra LB sources ranges",
            "networking.istio.lbSourceRanges",
            |s, v| {
                s.networking.istio.lb_source_ranges = v;
                s.networking.istio.enabled = true;
            },
        )
        .list(
            "Istio SVC annotations, format [key: value]",
            "networking.istio.ingressSvcAnnotations",
            |s, v| {
                s.networking.istio.ingress_svc_annotations = v;
                s.networking.istio.enabled = true;
            },
        )
}

fn logging() -> Menu {
    Menu::new("Logging")
        .set(
            "Disable Fluentbit",
            "logging.fluentbitEnabled",
            "Fluentbit is disabled",
            |s| s.logging.fluentbit_enabled = false,
        )
        .set(
            "Disable Kibana",
            "logging.kibanaEnabled",
            "Kibana is disabled",
            |s| s.logging.kibana_enabled = false,
        )
        .submenu("Configure Elastalert", elastalert())
        .text(
            "Input the Kibana service name",
            "logging.kibanaSvcName",
            Some("kibana"),
            |s, v| s.logging.kibana_svc_name = v,
        )
}

fn elastalert() -> Menu {
    Menu::new("Elastalert")
        .set(
            "Disable Elastalert",
            "logging.elastalert.enabled",
            "Elastalert is disabled",
            |s| s.logging.elastalert.enabled = false,
        )
        .text(
            "Input Storage Size",
            "logging.elastalert.storageSize",
            Some("30Gi"),
            |s, v| {
                s.logging.elastalert.storage_size = gibibytes(&v);
                s.logging.elastalert.enabled = true;
            },
        )
        .text(
            "Input Storage Class",
            "logging.elastalert.storageClass",
            None,
            |s, v| {
                s.logging.elastalert.storage_class = v;
                s.logging.elastalert.enabled = true;
            },
        )
        .list(
            "Input Node Selector, format [key: value]",
            "logging.elastalert.nodeSelector",
            |s, v| {
                s.logging.elastalert.node_selector = v;
                s.logging.elastalert.enabled = true;
            },
        )
}

fn registry() -> Menu {
    Menu::new("Registry")
        .text(
            "Input the registry URL",
            "registry.url",
            Some(DEFAULT_REGISTRY),
            |s, v| {
                if v != DEFAULT_REGISTRY {
                    s.registry.enabled = true;
                }
                s.registry.url = v;
            },
        )
        .verbatim("Input the registry User Name", "registry.user", |s, v| {
            s.registry.user = v;
            s.registry.enabled = true;
        })
        .secret("Input the registry Password", "registry.password", |s, v| {
            s.registry.password = v;
            s.registry.enabled = true;
        })
}

fn tenancy() -> Menu {
    Menu::new("Tenancy")
        .set(
            "Enable Tenancy",
            "tenancy.enabled",
            "Tenancy Enabled",
            |s| s.tenancy.enabled = true,
        )
        .text(
            "Input the Tenancy node selector key",
            "tenancy.key",
            Some("purpose"),
            |s, v| {
                s.tenancy.key = v;
                s.tenancy.enabled = true;
            },
        )
        .text(
            "Input the Tenancy node selector value",
            "tenancy.value",
            Some("cnvrg-control-plane"),
            |s, v| {
                s.tenancy.value = v;
                s.tenancy.enabled = true;
            },
        )
}

fn sso() -> Menu {
    Menu::new("Single Sign On")
        .set(
            "Enable Single Sign On",
            "sso.enabled",
            "Single Sign On Enabled",
            |s| s.sso.enabled = true,
        )
        .text("Input the Admin User", "sso.adminUser", None, |s, v| {
            s.sso.admin_user = v;
            s.sso.enabled = true;
        })
        .text("Input the SSO Provider", "sso.provider", None, |s, v| {
            s.sso.provider = v;
            s.sso.enabled = true;
        })
        .list("Input the Email Domains", "sso.emailDomain", |s, v| {
            s.sso.email_domain = v;
            s.sso.enabled = true;
        })
        .verbatim("Input the Client ID", "sso.clientId", |s, v| {
            s.sso.client_id = v;
            s.sso.enabled = true;
        })
        .secret("Input the Client Secret", "sso.clientSecret", |s, v| {
            s.sso.client_secret = v;
            s.sso.enabled = true;
        })
        .verbatim("Input the Azure Tenant", "sso.azureTenant", |s, v| {
            s.sso.azure_tenant = v;
            s.sso.enabled = true;
        })
        .text(
            "Input the OIDC Issuer URL",
            "sso.oidcIssuerUrl",
            None,
            |s, v| {
                s.sso.oidc_issuer_url = v;
                s.sso.enabled = true;
            },
        )
}

fn storage() -> Menu {
    Menu::new("Storage")
        .submenu("Modify HostPath settings", hostpath())
        .submenu("Modify NFS settings", nfs())
}

fn hostpath() -> Menu {
    Menu::new("HostPath")
        .set(
            "Set HostPath as the Default Storage Class",
            "storage.hostpath.defaultSc",
            "HostPath set as default Storage Class",
            |s| {
                s.storage.hostpath.enabled = true;
                s.storage.hostpath.default_sc = true;
            },
        )
        .verbatim("Input the path", "storage.hostpath.path", |s, v| {
            if !v.is_empty() {
                s.storage.hostpath.path = v;
            }
            s.storage.hostpath.enabled = true;
        })
        .choice(
            "Set the Reclaim Policy",
            "storage.hostpath.reclaimPolicy",
            RECLAIM_POLICIES,
            Some("Retain"),
            |s, v| {
                s.storage.hostpath.reclaim_policy = v;
                s.storage.hostpath.enabled = true;
            },
        )
        .list(
            "Set the Node Selector, format [key: value]",
            "storage.hostpath.nodeSelector",
            |s, v| {
                s.storage.hostpath.node_selector = v;
                s.storage.hostpath.enabled = true;
            },
        )
}

fn nfs() -> Menu {
    Menu::new("NFS")
        .text(
            "Input the NFS server IP address",
            "storage.nfs.server",
            None,
            |s, v| {
                s.storage.nfs.server = v;
                s.storage.nfs.enabled = true;
            },
        )
        .verbatim("Input the NFS export path", "storage.nfs.path", |s, v| {
            s.storage.nfs.path = v;
            s.storage.nfs.enabled = true;
        })
        .set(
            "Set NFS as default Storage Class",
            "storage.nfs.defaultSc",
            "NFS set as default Storage Class",
            |s| {
                s.storage.nfs.enabled = true;
                s.storage.nfs.default_sc = true;
            },
        )
        .choice(
            "Set the Reclaim Policy",
            "storage.nfs.reclaimPolicy",
            RECLAIM_POLICIES,
            Some("Retain"),
            |s, v| {
                s.storage.nfs.reclaim_policy = v;
                s.storage.nfs.enabled = true;
            },
        )
        .verbatim(
            "Input the NFS provisioner image",
            "storage.nfs.image",
            |s, v| {
                if !v.is_empty() {
                    s.storage.nfs.image = v;
                }
            },
        )
}

fn miscellaneous() -> Menu {
    Menu::new("Backup, Capsule, GPU and ConfigReloader")
        .submenu("Modify Backup settings", backup())
        .submenu("Modify Capsule settings", capsule())
        .submenu("Disable NvidiaDp or HabanaDp GPU", gpu())
        .set(
            "Disable ConfigReloader",
            "configReloader.enabled",
            "Config Reload is disabled",
            |s| s.config_reloader.enabled = false,
        )
}

fn backup() -> Menu {
    Menu::new("Backup")
        .set(
            "Disable Backups",
            "backup.enabled",
            "Backup is disabled",
            |s| s.backup.enabled = false,
        )
        .integer(
            "Input Backup Rotation",
            "backup.rotation",
            Some(5),
            |s, v| s.backup.rotation = v,
        )
        .text(
            "Input Backup Period",
            "backup.period",
            Some("24h"),
            |s, v| s.backup.period = v,
        )
}

fn capsule() -> Menu {
    Menu::new("Capsule")
        .set(
            "Disable Capsule",
            "capsule.enabled",
            "Capsule is disabled",
            |s| s.capsule.enabled = false,
        )
        .verbatim("Input the Capsule image", "capsule.image", |s, v| {
            if !v.is_empty() {
                s.capsule.image = v;
            }
        })
}

fn gpu() -> Menu {
    Menu::new("GPU")
        .set(
            "Disable Nvidia GPU",
            "gpu.nvidiaEnabled",
            "Nvidia GPU is disabled",
            |s| s.gpu.nvidia_enabled = false,
        )
        .set(
            "Disable Habana GPU",
            "gpu.habanaEnabled",
            "Habana GPU is disabled",
            |s| s.gpu.habana_enabled = false,
        )
}

fn monitoring() -> Menu {
    Menu::new("Monitoring")
        .set(
            "Disable dcgm Export Monitoring",
            "monitoring.dcgmExporterEnabled",
            "DCGM Export Disabled",
            |s| s.monitoring.dcgm_exporter_enabled = false,
        )
        .set(
            "Disable Habana Monitoring",
            "monitoring.habanaExporterEnabled",
            "Habana Export Disabled",
            |s| s.monitoring.habana_exporter_enabled = false,
        )
        .set(
            "Disable Node Export Monitoring",
            "monitoring.nodeExporterEnabled",
            "Node Export Disabled",
            |s| s.monitoring.node_exporter_enabled = false,
        )
        .set(
            "Disable Kube State Metric Monitoring",
            "monitoring.kubeStateMetricsEnabled",
            "Kube State Metrics Disabled",
            |s| s.monitoring.kube_state_metrics_enabled = false,
        )
        .set(
            "Disable Grafana Monitoring",
            "monitoring.grafana.enabled",
            "Grafana Disabled",
            |s| s.monitoring.grafana.enabled = false,
        )
        .set(
            "Disable the Prometheus Operator",
            "monitoring.prometheusOperatorEnabled",
            "Prometheus Operator Disabled",
            |s| s.monitoring.prometheus_operator_enabled = false,
        )
        .set(
            "Disable Prometheus",
            "monitoring.prometheus.enabled",
            "Prometheus Disabled",
            |s| s.monitoring.prometheus.enabled = false,
        )
        .set(
            "Disable Default Svc Monitoring",
            "monitoring.defaultServiceMonitorsEnabled",
            "Default svc Monitor Disabled",
            |s| s.monitoring.default_service_monitors_enabled = false,
        )
        .set(
            "Disable cnvrg Idle Metrics",
            "monitoring.cnvrgIdleMetrics.enabled",
            "cnvrg Idle Metrics Disabled",
            |s| s.monitoring.cnvrg_idle_metrics.enabled = false,
        )
        .submenu("Modify Prometheus storage", prometheus())
        .text(
            "Input the Grafana service name",
            "monitoring.grafana.svcName",
            Some("grafana"),
            |s, v| s.monitoring.grafana.svc_name = v,
        )
        .list(
            "Input cnvrg Idle Metrics labels, format [key: value]",
            "monitoring.cnvrgIdleMetrics.labels",
            |s, v| s.monitoring.cnvrg_idle_metrics.labels = v,
        )
}

fn prometheus() -> Menu {
    Menu::new("Prometheus")
        .text(
            "Input Storage Size",
            "monitoring.prometheus.storageSize",
            Some("50Gi"),
            |s, v| s.monitoring.prometheus.storage_size = gibibytes(&v),
        )
        .text(
            "Input Storage Class",
            "monitoring.prometheus.storageClass",
            None,
            |s, v| s.monitoring.prometheus.storage_class = v,
        )
        .list(
            "Input Node Selector, format [key: value]",
            "monitoring.prometheus.nodeSelector",
            |s, v| s.monitoring.prometheus.node_selector = v,
        )
}

fn control_plane() -> Menu {
    Menu::new("ControlPlane")
        .verbatim("Input the Control Plane image", "controlPlane.image", |s, v| {
            if !v.is_empty() {
                s.control_plane.image = v;
            }
        })
        .submenu("Modify Base Config", base_config())
        .submenu("Enable or disable Control Plane services", services())
        .submenu("Modify replicas and autoscaling", scaling())
        .submenu("Modify Object Storage", object_storage())
        .submenu("Modify SMTP", smtp())
        .submenu("Modify MPI", mpi())
}

fn base_config() -> Menu {
    Menu::new("Base Config")
        .verbatim(
            "Input the agent tag",
            "controlPlane.baseConfig.agentTag",
            |s, v| {
                if !v.is_empty() {
                    s.control_plane.base_config.agent_tag = v;
                }
            },
        )
        .set(
            "Disable Intercom",
            "controlPlane.baseConfig.intercom",
            "Intercom Disabled",
            |s| s.control_plane.base_config.intercom = false,
        )
        .list(
            "Input feature flags, format [key: value]",
            "controlPlane.baseConfig.featureFlags",
            |s, v| s.control_plane.base_config.feature_flags = v,
        )
        .set(
            "Disable cnvrg privileged jobs",
            "controlPlane.baseConfig.cnvrgPrivilegedJob",
            "cnvrg privileged jobs Disabled",
            |s| s.control_plane.base_config.cnvrg_privileged_job = false,
        )
}

fn services() -> Menu {
    Menu::new("Control Plane Services")
        .set(
            "Disable Hyper",
            "controlPlane.services.hyperEnabled",
            "Hyper Disabled",
            |s| s.control_plane.services.hyper_enabled = false,
        )
        .set(
            "Disable cnvrg Scheduler",
            "controlPlane.services.schedulerEnabled",
            "cnvrg.io Scheduler Disabled",
            |s| s.control_plane.services.scheduler_enabled = false,
        )
        .set(
            "Enable cnvrg Cluster Provisioner",
            "controlPlane.services.clusterProvisionerEnabled",
            "cnvrg.io Cluster Provisioner Enabled",
            |s| s.control_plane.services.cluster_provisioner_enabled = true,
        )
        .set(
            "Disable Searchkiq",
            "controlPlane.services.searchkiqEnabled",
            "Searchkiq Disabled",
            |s| s.control_plane.services.searchkiq_enabled = false,
        )
        .set(
            "Disable Sidekiq",
            "controlPlane.services.sidekiqEnabled",
            "Sidekiq Disabled",
            |s| s.control_plane.services.sidekiq_enabled = false,
        )
        .set(
            "Disable Systemkiq",
            "controlPlane.services.systemkiqEnabled",
            "Systemkiq Disabled",
            |s| s.control_plane.services.systemkiq_enabled = false,
        )
        .set(
            "Disable Webapp",
            "controlPlane.services.webappEnabled",
            "Webapp Disabled",
            |s| s.control_plane.services.webapp_enabled = false,
        )
        .set(
            "Disable MPI",
            "controlPlane.services.mpiEnabled",
            "MPI Disabled",
            |s| s.control_plane.services.mpi_enabled = false,
        )
        .set(
            "Enable cnvrg Router",
            "controlPlane.services.routerEnabled",
            "cnvrg Router Enabled",
            |s| s.control_plane.services.router_enabled = true,
        )
}

fn scaling() -> Menu {
    Menu::new("Scaling")
        .set(
            "Disable Searchkiq autoscaling",
            "controlPlane.searchkiq.hpaEnabled",
            "Searchkiq autoscaling Disabled",
            |s| s.control_plane.searchkiq.hpa_enabled = false,
        )
        .integer(
            "Input Searchkiq max replicas",
            "controlPlane.searchkiq.hpaMaxReplicas",
            Some(5),
            |s, v| s.control_plane.searchkiq.hpa_max_replicas = v,
        )
        .set(
            "Disable Sidekiq split",
            "controlPlane.sidekiq.split",
            "Sidekiq split Disabled",
            |s| s.control_plane.sidekiq.split = false,
        )
        .set(
            "Disable Sidekiq autoscaling",
            "controlPlane.sidekiq.hpaEnabled",
            "Sidekiq autoscaling Disabled",
            |s| s.control_plane.sidekiq.hpa_enabled = false,
        )
        .integer(
            "Input Sidekiq max replicas",
            "controlPlane.sidekiq.hpaMaxReplicas",
            Some(5),
            |s, v| s.control_plane.sidekiq.hpa_max_replicas = v,
        )
        .set(
            "Disable Systemkiq autoscaling",
            "controlPlane.systemkiq.hpaEnabled",
            "Systemkiq autoscaling Disabled",
            |s| s.control_plane.systemkiq.hpa_enabled = false,
        )
        .integer(
            "Input Systemkiq max replicas",
            "controlPlane.systemkiq.hpaMaxReplicas",
            Some(5),
            |s, v| s.control_plane.systemkiq.hpa_max_replicas = v,
        )
        .integer(
            "Input Webapp replicas",
            "controlPlane.webapp.replicas",
            Some(1),
            |s, v| s.control_plane.webapp.replicas = v,
        )
        .set(
            "Disable Webapp autoscaling",
            "controlPlane.webapp.hpaEnabled",
            "Webapp autoscaling Disabled",
            |s| s.control_plane.webapp.hpa_enabled = false,
        )
        .integer(
            "Input Webapp max replicas",
            "controlPlane.webapp.hpaMaxReplicas",
            Some(5),
            |s, v| s.control_plane.webapp.hpa_max_replicas = v,
        )
        .text(
            "Input the Webapp service name",
            "controlPlane.webapp.svcName",
            Some("app"),
            |s, v| s.control_plane.webapp.svc_name = v,
        )
}

fn object_storage() -> Menu {
    Menu::new("Object Storage")
        .choice(
            "Input the Object Storage type",
            "controlPlane.objectStorage.type",
            OBJECT_STORAGE_TYPES,
            Some("minio"),
            |s, v| s.control_plane.object_storage.kind = v,
        )
        .text(
            "Input the bucket name",
            "controlPlane.objectStorage.bucket",
            Some("cnvrg-storage"),
            |s, v| s.control_plane.object_storage.bucket = v,
        )
        .text(
            "Input the region",
            "controlPlane.objectStorage.region",
            Some("eastus"),
            |s, v| s.control_plane.object_storage.region = v,
        )
        .secret(
            "Input the access key",
            "controlPlane.objectStorage.accessKey",
            |s, v| s.control_plane.object_storage.access_key = v,
        )
        .secret(
            "Input the secret key",
            "controlPlane.objectStorage.secretKey",
            |s, v| s.control_plane.object_storage.secret_key = v,
        )
        .text(
            "Input the endpoint",
            "controlPlane.objectStorage.endpoint",
            None,
            |s, v| s.control_plane.object_storage.endpoint = v,
        )
        .verbatim(
            "Input the Azure account name",
            "controlPlane.objectStorage.azureAccountName",
            |s, v| s.control_plane.object_storage.azure_account_name = v,
        )
        .verbatim(
            "Input the Azure container",
            "controlPlane.objectStorage.azureContainer",
            |s, v| s.control_plane.object_storage.azure_container = v,
        )
        .verbatim(
            "Input the GCP secret ref",
            "controlPlane.objectStorage.gcpSecretRef",
            |s, v| s.control_plane.object_storage.gcp_secret_ref = v,
        )
        .verbatim(
            "Input the GCP project",
            "controlPlane.objectStorage.gcpProject",
            |s, v| s.control_plane.object_storage.gcp_project = v,
        )
}

fn smtp() -> Menu {
    Menu::new("SMTP")
        .text(
            "Input the SMTP server",
            "controlPlane.smtp.server",
            None,
            |s, v| s.control_plane.smtp.server = v,
        )
        .integer(
            "Input the SMTP port",
            "controlPlane.smtp.port",
            Some(587),
            |s, v| s.control_plane.smtp.port = v,
        )
        .verbatim(
            "Input the SMTP username",
            "controlPlane.smtp.username",
            |s, v| s.control_plane.smtp.username = v,
        )
        .secret(
            "Input the SMTP password",
            "controlPlane.smtp.password",
            |s, v| s.control_plane.smtp.password = v,
        )
        .text(
            "Input the SMTP domain",
            "controlPlane.smtp.domain",
            None,
            |s, v| s.control_plane.smtp.domain = v,
        )
        .text(
            "Input the OpenSSL verify mode",
            "controlPlane.smtp.opensslVerifyMode",
            None,
            |s, v| s.control_plane.smtp.openssl_verify_mode = v,
        )
        .text(
            "Input the sender address",
            "controlPlane.smtp.sender",
            Some("info@cnvrg.io"),
            |s, v| s.control_plane.smtp.sender = v,
        )
}

fn mpi() -> Menu {
    Menu::new("MPI")
        .verbatim("Input the MPI operator image", "controlPlane.mpi.image", |s, v| {
            if !v.is_empty() {
                s.control_plane.mpi.image = v;
            }
        })
        .verbatim(
            "Input the kubectl delivery image",
            "controlPlane.mpi.kubectlImage",
            |s, v| {
                if !v.is_empty() {
                    s.control_plane.mpi.kubectl_image = v;
                }
            },
        )
        .list(
            "Input extra MPI operator arguments",
            "controlPlane.mpi.extraArgs",
            |s, v| s.control_plane.mpi.extra_args = v,
        )
        .text(
            "Input the MPI registry URL",
            "controlPlane.mpi.registryUrl",
            Some(DEFAULT_REGISTRY),
            |s, v| s.control_plane.mpi.registry_url = v,
        )
        .verbatim(
            "Input the MPI registry user",
            "controlPlane.mpi.registryUser",
            |s, v| s.control_plane.mpi.registry_user = v,
        )
        .secret(
            "Input the MPI registry password",
            "controlPlane.mpi.registryPassword",
            |s, v| s.control_plane.mpi.registry_password = v,
        )
}

fn databases() -> Menu {
    Menu::new("Database")
        .set(
            "Enable CVAT",
            "dbs.cvat.enabled",
            "CVAT enabled",
            |s| s.dbs.cvat.enabled = true,
        )
        .submenu("Modify Elastic Search", elasticsearch())
        .submenu("Modify Minio", minio())
        .submenu("Modify Postgres", postgres())
        .submenu("Modify Redis", redis())
}

fn elasticsearch() -> Menu {
    Menu::new("Elastic Search")
        .set(
            "Disable Elastic Search",
            "dbs.es.enabled",
            "Elastic Search disabled",
            |s| s.dbs.es.enabled = false,
        )
        .text(
            "Input Storage Size",
            "dbs.es.storageSize",
            Some("80Gi"),
            |s, v| {
                s.dbs.es.storage_size = gibibytes(&v);
                s.dbs.es.enabled = true;
            },
        )
        .text(
            "Input Storage Class",
            "dbs.es.storageClass",
            None,
            |s, v| {
                s.dbs.es.storage_class = v;
                s.dbs.es.enabled = true;
            },
        )
        .set(
            "Disable Patch Elastic Search Nodes",
            "dbs.es.patchEsNodes",
            "Elastic Search Patch Nodes disabled",
            |s| s.dbs.es.patch_es_nodes = false,
        )
        .list(
            "Input Node Selector, format [key: value]",
            "dbs.es.nodeSelector",
            |s, v| {
                s.dbs.es.node_selector = v;
                s.dbs.es.enabled = true;
            },
        )
        .submenu("Modify index Cleanup Policy", cleanup_policy())
}

fn cleanup_policy() -> Menu {
    Menu::new("Cleanup Policy")
        .text(
            "Input retention for all indices",
            "dbs.es.cleanupPolicy.all",
            Some("3d"),
            |s, v| s.dbs.es.cleanup_policy.all = v,
        )
        .text(
            "Input retention for app indices",
            "dbs.es.cleanupPolicy.app",
            Some("30d"),
            |s, v| s.dbs.es.cleanup_policy.app = v,
        )
        .text(
            "Input retention for job indices",
            "dbs.es.cleanupPolicy.jobs",
            Some("14d"),
            |s, v| s.dbs.es.cleanup_policy.jobs = v,
        )
        .text(
            "Input retention for endpoint indices",
            "dbs.es.cleanupPolicy.endpoints",
            Some("1d"),
            |s, v| s.dbs.es.cleanup_policy.endpoints = v,
        )
}

fn minio() -> Menu {
    Menu::new("Minio")
        .set(
            "Disable Minio",
            "dbs.minio.enabled",
            "Minio disabled",
            |s| s.dbs.minio.enabled = false,
        )
        .text(
            "Input Storage Size",
            "dbs.minio.storageSize",
            Some("100Gi"),
            |s, v| s.dbs.minio.storage_size = gibibytes(&v),
        )
        .text(
            "Input Storage Class",
            "dbs.minio.storageClass",
            None,
            |s, v| s.dbs.minio.storage_class = v,
        )
        .list(
            "Input Node Selector, format [key: value]",
            "dbs.minio.nodeSelector",
            |s, v| s.dbs.minio.node_selector = v,
        )
}

fn postgres() -> Menu {
    Menu::new("Postgres")
        .set(
            "Disable Postgres",
            "dbs.pg.enabled",
            "Postgres disabled",
            |s| s.dbs.pg.enabled = false,
        )
        .text(
            "Input Storage Size",
            "dbs.pg.storageSize",
            Some("80Gi"),
            |s, v| s.dbs.pg.storage_size = gibibytes(&v),
        )
        .text(
            "Input Storage Class",
            "dbs.pg.storageClass",
            None,
            |s, v| s.dbs.pg.storage_class = v,
        )
        .list(
            "Input Node Selector, format [key: value]",
            "dbs.pg.nodeSelector",
            |s, v| s.dbs.pg.node_selector = v,
        )
        .submenu("Modify Huge Pages", huge_pages())
}

fn huge_pages() -> Menu {
    Menu::new("Huge Pages")
        .set(
            "Enable Huge Pages",
            "dbs.pg.hugePages.enabled",
            "Huge Pages enabled",
            |s| s.dbs.pg.huge_pages.enabled = true,
        )
        .choice(
            "Input the Huge Page size",
            "dbs.pg.hugePages.size",
            &["2Mi", "1Gi"],
            Some("2Mi"),
            |s, v| {
                s.dbs.pg.huge_pages.size = v;
                s.dbs.pg.huge_pages.enabled = true;
            },
        )
        .verbatim(
            "Input the Huge Pages memory",
            "dbs.pg.hugePages.memory",
            |s, v| {
                s.dbs.pg.huge_pages.memory = v;
                s.dbs.pg.huge_pages.enabled = true;
            },
        )
}

fn redis() -> Menu {
    Menu::new("Redis")
        .set(
            "Disable Redis",
            "dbs.redis.enabled",
            "Redis disabled",
            |s| s.dbs.redis.enabled = false,
        )
        .text(
            "Input Storage Size",
            "dbs.redis.storageSize",
            Some("10Gi"),
            |s, v| s.dbs.redis.storage_size = gibibytes(&v),
        )
        .text(
            "Input Storage Class",
            "dbs.redis.storageClass",
            None,
            |s, v| s.dbs.redis.storage_class = v,
        )
        .list(
            "Input Node Selector, format [key: value]",
            "dbs.redis.nodeSelector",
            |s, v| s.dbs.redis.node_selector = v,
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Context;
    use crate::schema::Session;
    use crate::traits::{MockFileSystem, MockOutput, MockUserInput};
    use crate::wizard::menu::Action;
    use std::sync::Arc;

    fn run_root(lines: &[&str]) -> (Session, Arc<MockUserInput>) {
        let input = Arc::new(MockUserInput::with_lines(lines));
        let ctx = Context::test_with(
            Arc::new(MockFileSystem::new()),
            input.clone(),
            Arc::new(MockOutput::new()),
        );
        let mut session = Session::default();
        root().run(&ctx, &mut session).unwrap();
        (session, input)
    }

    fn count_menus(menu: &Menu) -> usize {
        1 + menu
            .entries
            .iter()
            .map(|entry| match &entry.action {
                Action::Submenu(child) => count_menus(child),
                _ => 0,
            })
            .sum::<usize>()
    }

    #[test]
    fn test_root_exit_is_twelve() {
        let root = root();
        assert_eq!(root.entries.len(), 11);
        assert_eq!(root.done_number(), 12);
    }

    #[test]
    fn test_every_menu_has_options() {
        fn check(menu: &Menu) {
            assert!(!menu.entries.is_empty(), "{} has no options", menu.title);
            for entry in &menu.entries {
                if let Action::Submenu(child) = &entry.action {
                    check(child);
                }
            }
        }
        check(&root());
        assert!(count_menus(&root()) > 30);
    }

    #[test]
    fn test_root_done_without_changes_keeps_defaults() {
        let (session, _) = run_root(&["12"]);
        assert_eq!(session, Session::default());
    }

    #[test]
    fn test_proxy_lists_enable_proxy() {
        // Networking -> Proxy -> HTTP proxies
        let (session, input) = run_root(&[
            "2", "1", "2", "http://proxy:3128", "http://backup:3128", "", "5", "5", "12",
        ]);

        assert!(session.networking.proxy.enabled);
        assert_eq!(
            session.networking.proxy.http_proxy,
            vec!["http://proxy:3128", "http://backup:3128"]
        );
        assert_eq!(input.remaining(), 0);
    }

    #[test]
    fn test_ingress_type_nodeport_disables_istio() {
        let (session, _) = run_root(&["2", "2", "1", "NodePort", "4", "5", "12"]);

        assert_eq!(session.networking.ingress.kind, "nodeport");
        assert!(!session.networking.istio.enabled);
        assert!(!session.networking.ingress.istio_gw_enabled);
    }

    #[test]
    fn test_https_confirm_and_certificate() {
        let (session, _) = run_root(&["2", "3", "1", "maybe", "yes", "2", "My-Cert", "3", "5", "12"]);

        assert!(session.networking.https.enabled);
        assert_eq!(session.networking.https.cert_secret, "My-Cert");
    }

    #[test]
    fn test_labels_accumulate() {
        let (session, _) = run_root(&[
            "1", "1", "team: ml", "", "1", "env: prod", "", "4", "12",
        ]);

        assert_eq!(session.labels, vec!["team: ml", "env: prod"]);
    }

    #[test]
    fn test_registry_password_keeps_case() {
        let (session, _) = run_root(&["4", "2", "Robot", "3", "Pa55Word", "4", "12"]);

        assert!(session.registry.enabled);
        assert_eq!(session.registry.user, "Robot");
        assert_eq!(session.registry.password, "Pa55Word");
        assert_eq!(session.registry.url, "docker.io");
    }

    #[test]
    fn test_registry_default_url_does_not_enable() {
        let (session, _) = run_root(&["4", "1", "", "4", "12"]);

        assert!(!session.registry.enabled);
        assert_eq!(session.registry.url, "docker.io");
    }

    #[test]
    fn test_backup_settings() {
        // Miscellaneous -> Backup
        let (session, _) = run_root(&["8", "1", "1", "2", "7", "3", "12H", "4", "5", "12"]);

        assert!(!session.backup.enabled);
        assert_eq!(session.backup.rotation, 7);
        assert_eq!(session.backup.period, "12h");
    }

    #[test]
    fn test_hostpath_reclaim_policy_reprompts() {
        // Storage -> HostPath -> Reclaim Policy
        let (session, _) = run_root(&["7", "1", "3", "keep", "recycle", "5", "3", "12"]);

        assert_eq!(session.storage.hostpath.reclaim_policy, "Recycle");
        assert!(session.storage.hostpath.enabled);
    }

    #[test]
    fn test_database_storage_sizes_use_gi() {
        // Databases -> Elastic Search -> size, then Redis -> size
        let (session, _) = run_root(&[
            "11", "2", "2", "120", "3", "fast-ssd", "7", "5", "2", "20gi", "5", "6", "12",
        ]);

        assert_eq!(session.dbs.es.storage_size, "120Gi");
        assert_eq!(session.dbs.es.storage_class, "fast-ssd");
        assert_eq!(session.dbs.redis.storage_size, "20Gi");
    }

    #[test]
    fn test_control_plane_services_and_smtp() {
        let (session, _) = run_root(&[
            "10", "3", "1", "3", "10", "6", "2", "2525", "4", "MailPass", "8", "8", "12",
        ]);

        assert!(!session.control_plane.services.hyper_enabled);
        assert!(session.control_plane.services.cluster_provisioner_enabled);
        assert_eq!(session.control_plane.smtp.port, 2525);
        assert_eq!(session.control_plane.smtp.password, "MailPass");
    }

    #[test]
    fn test_monitoring_disables() {
        let (session, _) = run_root(&["9", "5", "7", "13", "12"]);

        assert!(!session.monitoring.grafana.enabled);
        assert!(!session.monitoring.prometheus.enabled);
        assert!(session.monitoring.node_exporter_enabled);
    }
}
