/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Input path meaning "read from stdin"
    pub const INPUT: &str = "-";
}

/// Projection sources for the fixed table layouts
pub mod projections {
    /// Summary of a managed cluster (`list` and `show`)
    pub const SUMMARY: &str = "{
        name: name,
        location: location,
        resourceGroup: resourceGroup,
        kubernetesVersion: properties.kubernetesVersion,
        provisioningState: properties.provisioningState,
        fqdn: properties.fqdn
    }";

    /// Current and available versions from an upgrade profile (`get-versions`)
    pub const UPGRADE_VERSIONS: &str = "{
        name: name,
        resourceGroup: resourceGroup,
        masterVersion: properties.controlPlaneProfile.kubernetesVersion || `unknown`,
        masterUpgrades: properties.controlPlaneProfile.upgrades || [`None available`] | sort(@) | join(`, `, @),
        nodeVersion: properties.agentPoolProfiles[0].kubernetesVersion || `unknown`,
        nodeUpgrades: properties.agentPoolProfiles[0].upgrades || [`None available`] | sort(@) | join(`, `, @)
    }";
}
